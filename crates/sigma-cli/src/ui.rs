//! Terminal-dependent table settings, resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// Narrower terminals get no width limit; the table wraps instead.
const NARROWEST_TERMINAL: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Decide verdict colouring and width limit for table output.
pub fn configure_tables(flags: &GlobalFlags) {
    let terminal = Terminal {
        stdout_is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS").ok(),
    };
    let options = terminal.table_options(flags);
    tracing::debug!(?options, "table output settings");
    let _ = TABLE_OPTIONS.set(options);
}

/// Settings chosen by [`configure_tables`], or plain unlimited tables before it runs.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

/// What the process knows about its terminal.
struct Terminal {
    stdout_is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn table_options(&self, flags: &GlobalFlags) -> TableOptions {
        TableOptions {
            max_width: self.width_limit(),
            color: self.colors_verdicts(flags),
        }
    }

    fn colors_verdicts(&self, flags: &GlobalFlags) -> bool {
        if flags.format != OutputFormat::Table {
            return false;
        }
        match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => self.stdout_is_tty && !self.no_color && !flags.quiet,
        }
    }

    fn width_limit(&self) -> Option<usize> {
        let width = self.columns.as_deref()?.trim().parse::<usize>().ok()?;
        (width >= NARROWEST_TERMINAL).then_some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
            root: None,
            config: None,
        }
    }

    fn tty(columns: Option<&str>) -> Terminal {
        Terminal {
            stdout_is_tty: true,
            no_color: false,
            columns: columns.map(str::to_string),
        }
    }

    #[rstest]
    #[case(Some("120"), Some(120))]
    #[case(Some(" 80 "), Some(80))]
    #[case(Some("39"), None)]
    #[case(Some("wide"), None)]
    #[case(None, None)]
    fn width_comes_from_columns(#[case] columns: Option<&str>, #[case] expected: Option<usize>) {
        assert_eq!(tty(columns).width_limit(), expected);
    }

    #[test]
    fn only_table_output_is_coloured() {
        let terminal = tty(None);
        assert!(terminal.colors_verdicts(&flags(OutputFormat::Table, ColorMode::Always)));
        assert!(!terminal.colors_verdicts(&flags(OutputFormat::Json, ColorMode::Always)));
        assert!(!terminal.colors_verdicts(&flags(OutputFormat::Table, ColorMode::Never)));
    }

    #[test]
    fn auto_colour_needs_a_tty_and_no_opt_out() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(tty(None).colors_verdicts(&table));

        let piped = Terminal {
            stdout_is_tty: false,
            ..tty(None)
        };
        assert!(!piped.colors_verdicts(&table));

        let opted_out = Terminal {
            no_color: true,
            ..tty(None)
        };
        assert!(!opted_out.colors_verdicts(&table));

        let quiet = GlobalFlags {
            quiet: true,
            ..table
        };
        assert!(!tty(None).colors_verdicts(&quiet));
    }

    #[test]
    fn unconfigured_tables_are_plain() {
        let options = table_options();
        assert!(!options.color);
        assert_eq!(options.max_width, None);
    }
}
