mod about;
pub use about::About;

mod home;
pub use home::Home;

mod loans;
pub use loans::Loans;
