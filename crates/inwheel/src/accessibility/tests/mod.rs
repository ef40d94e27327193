mod common;
mod restroom;
