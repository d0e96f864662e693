mod catalog;
mod common;
mod synthesis;
