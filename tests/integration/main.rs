//! End-to-end tests driving the `prefmt` binary over stdin/stdout.

mod basic_pipe;
mod color_control;
mod timestamps;
