mod common;
mod navbar_style;
mod storage;
