//! Styled terminal output helpers.

use owo_colors::OwoColorize;
use scout_common::tech_stack;
use scout_common::Session;
use std::io::{self, IsTerminal, Write};

/// Small styled-output helper, color only on a TTY.
pub struct Ui {
    color: bool,
}

impl Ui {
    pub fn auto() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    /// A bot turn.
    pub fn bot(&self, message: &str) {
        println!();
        if self.color {
            println!("{}  {}", "[scout]".bright_cyan(), message);
        } else {
            println!("[scout]  {}", message);
        }
        println!();
    }

    /// The input prompt, no trailing newline.
    pub fn prompt(&self) {
        if self.color {
            print!("{}  ", "[you]".bright_green());
        } else {
            print!("[you]  ");
        }
        let _ = io::stdout().flush();
    }

    pub fn info(&self, message: &str) {
        if self.color {
            println!("{}", message.dimmed());
        } else {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if self.color {
            println!("{} {}", "✓".bright_green(), message);
        } else {
            println!("ok: {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.color {
            println!("{} {}", "!".yellow(), message.yellow());
        } else {
            println!("warning: {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "✗".bright_red(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }

    pub fn section(&self, title: &str) {
        println!();
        if self.color {
            println!("{}", title.bright_white().bold());
        } else {
            println!("{}", title);
        }
        println!("{}", "─".repeat(40));
    }

    /// Completion summary: profile, categorized stack, progress.
    pub fn summary(&self, session: &Session) {
        self.section("Candidate Summary");
        print!("{}", render_summary(session));
    }
}

/// Build the candidate summary text: collected fields, categorized stack,
/// answer progress.
pub fn render_summary(session: &Session) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let profile = &session.profile;

    for (label, value) in [
        ("Name", profile.full_name.as_deref()),
        ("Email", profile.email.as_deref()),
        ("Phone", profile.phone.as_deref()),
        ("Experience", profile.years_experience.as_deref()),
        ("Position", profile.desired_position.as_deref()),
        ("Location", profile.current_location.as_deref()),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "  {:<12} {}", label, value);
        }
    }

    if let Some(stack) = profile.tech_stack.as_deref() {
        out.push('\n');
        out.push_str("  Tech stack:\n");
        for (category, items) in tech_stack::categorize(stack) {
            let _ = writeln!(out, "    {:<12} {}", category.label(), items.join(", "));
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "  Questions answered: {}/{}",
        session.transcript.len(),
        session.questions.len()
    );
    out
}
