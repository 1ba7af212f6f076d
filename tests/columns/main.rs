mod common;

mod bitmap;
mod column;
mod index;
mod properties;
