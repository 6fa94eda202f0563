// ABOUTME: Library crate for teapot exposing the wizard engine for the binary and for testing

#![allow(missing_docs)]

pub mod app;
pub mod cache;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod generator;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod validation;
