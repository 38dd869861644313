mod bank;
mod classification;
mod common;
mod service;
