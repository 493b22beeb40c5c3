//! Command implementations for the fpl-form CLI

pub mod common;
pub mod config;
pub mod fixtures;
pub mod player_form;
pub mod score;
pub mod team_form;
