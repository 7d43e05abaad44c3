pub use super::admin::Entity as Admin;
pub use super::fitness_class::Entity as FitnessClass;
pub use super::membership::Entity as Membership;
pub use super::notification::Entity as Notification;
pub use super::order::Entity as Order;
pub use super::otp::Entity as Otp;
pub use super::program::Entity as Program;
pub use super::trainer::Entity as Trainer;
pub use super::user::Entity as User;
