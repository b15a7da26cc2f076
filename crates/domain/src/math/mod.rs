pub mod amortization;

pub use amortization::{monthly_payment, simulate_mortgage};
