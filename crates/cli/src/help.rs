// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with the command list ahead of options.
pub fn template() -> String {
    let options = if colors::should_colorize() {
        colors::header("Options:")
    } else {
        "Options:".to_string()
    };
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}
{}
{{options}}{{after-help}}",
        options
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let color = colors::should_colorize();
    let header = |s: &str| if color { colors::header(s) } else { s.to_string() };
    let literal = |s: &str| if color { colors::literal(s) } else { s.to_string() };

    format!(
        "\
{header_setup}
  {init}                   Install rules, workflow directories, and hooks
  {init_flowmates_config}  Record the flowmates repository location
  {completion}             Generate shell completions
",
        header_setup = header("Setup:"),
        init = literal("init"),
        init_flowmates_config = literal("init-flowmates-config"),
        completion = literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  echo init-flowmates-config --path ~/src/flowmates   Point echo at your rules
  echo init                                           Set up the current repository
  echo init --force                                   Refresh installed files",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
