pub mod confirmation;
pub mod error;
pub mod form;
pub mod validation;

#[cfg(test)]
mod test;
