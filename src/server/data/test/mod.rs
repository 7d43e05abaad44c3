mod admin;
mod fitness_class;
mod membership;
mod notification;
mod order;
mod program;
mod trainer;
mod user;
