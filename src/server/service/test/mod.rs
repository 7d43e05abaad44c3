mod auth;
mod catalog;
mod notification;
mod order;
mod otp;
mod revenue;
