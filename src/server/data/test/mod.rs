mod event;
mod group;
mod profile;
mod session;
mod user;
