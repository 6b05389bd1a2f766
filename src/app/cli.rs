use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run clang-format in place over every C/C++ source under the project roots"
)]
pub struct Cli {
    /// Print a line before and after formatting each file
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_defaults_to_off() {
        let cli = Cli::try_parse_from(["clang-format-all"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_flag_is_parsed() {
        let cli = Cli::try_parse_from(["clang-format-all", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["clang-format-all", "--dirs", "src"]).is_err());
    }
}
