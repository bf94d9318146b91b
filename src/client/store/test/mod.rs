use crate::{
    client::store::{AppState, Collection},
    model::{
        project::Project,
        service::{PaymentType, Service},
    },
};

mod save;

/// Helper function to build an unsaved service
fn new_service(name: &str) -> Service {
    Service {
        id: None,
        name: name.to_string(),
        payment_type: PaymentType::Agreement,
        price: None,
        is_active: false,
    }
}

/// Helper function to build an unsaved project
fn new_project(name: &str) -> Project {
    Project {
        id: None,
        name: name.to_string(),
        photo: None,
        description: String::new(),
        price: "100".to_string(),
    }
}

/// Helper function to create a collection holding one saved service per name
fn seeded_services(names: &[&str]) -> Collection<Service> {
    let mut services = Collection::default();
    for name in names {
        services.save(new_service(name));
    }
    services
}

fn names(services: &Collection<Service>) -> Vec<&str> {
    services.items().iter().map(|s| s.name.as_str()).collect()
}
