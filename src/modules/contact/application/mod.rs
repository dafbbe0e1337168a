pub mod contact_use_cases;
pub mod ports;
pub mod services;

pub use contact_use_cases::ContactUseCases;
