use console::style;

/// Theme for styled terminal output
#[derive(Clone)]
pub struct Theme {
    pub accent: fn(&str) -> console::StyledObject<&str>,
    pub success: fn(&str) -> console::StyledObject<&str>,
    pub error: fn(&str) -> console::StyledObject<&str>,
    pub warning: fn(&str) -> console::StyledObject<&str>,
    pub info: fn(&str) -> console::StyledObject<&str>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: |s| style(s).cyan().bold(),
            success: |s| style(s).green().bold(),
            error: |s| style(s).red().bold(),
            warning: |s| style(s).yellow(),
            info: |s| style(s).blue(),
        }
    }
}

impl Theme {
    pub fn no_color() -> Self {
        Self {
            accent: |s| style(s),
            success: |s| style(s),
            error: |s| style(s),
            warning: |s| style(s),
            info: |s| style(s),
        }
    }

    pub fn success(&self, msg: &str) {
        println!("{} {}", (self.success)("✓"), msg);
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", (self.error)("✗"), msg);
    }

    pub fn warning(&self, msg: &str) {
        println!("{} {}", (self.warning)("⚠"), msg);
    }

    pub fn info(&self, msg: &str) {
        println!("{} {}", (self.info)("ℹ"), msg);
    }

    pub fn step(&self, n: usize, total: usize, msg: &str) {
        println!("{} {}", (self.accent)(&format!("[{}/{}]", n, total)), msg);
    }
}

pub fn spinner_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap()
}

pub fn spinner(msg: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(msg.to_string());
    pb
}
