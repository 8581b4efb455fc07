//! Integration tests for directory class generation

mod cli_parse;
mod failure_recovery;
mod nested_tree;
mod support;
