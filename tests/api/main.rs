mod landing;
mod login;
mod metrics;
mod orders;
mod pages;
mod utils;
