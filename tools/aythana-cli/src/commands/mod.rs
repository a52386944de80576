//! CLI command implementations.

pub mod add;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod count;
pub mod shop;
pub mod summary;

use aythana_cart::checkout::Channel;
use aythana_cart::ProductId;
use clap::{Args, Subcommand};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ids to add, one unit each (repeat an id to add more).
    #[arg(required = true)]
    pub ids: Vec<ProductId>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Channel to send the order through (whatsapp, email).
    #[arg(long)]
    pub channel: Option<Channel>,

    /// Empty the cart after sending without asking.
    #[arg(long, conflicts_with = "keep")]
    pub clear: bool,

    /// Keep the cart after sending without asking.
    #[arg(long)]
    pub keep: bool,

    /// Print the hand-off link instead of opening it.
    #[arg(long)]
    pub no_open: bool,

    /// Open the hand-off link with this program instead of the system handler.
    #[arg(long, value_name = "PROGRAM", conflicts_with = "no_open")]
    pub open_with: Option<String>,
}

impl CheckoutArgs {
    /// Answer to the clear question given on the command line, if any.
    pub fn clear_answer(&self) -> Option<bool> {
        match (self.clear, self.keep) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Initialize a new config file.
    Init {
        /// Overwrite existing config.
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Sub,
    }

    #[derive(Subcommand)]
    enum Sub {
        Add(AddArgs),
        Checkout(CheckoutArgs),
    }

    #[test]
    fn test_add_parses_ids() {
        let Harness { command } = Harness::try_parse_from(["aythana", "add", "1", "1", "3"]).unwrap();
        match command {
            Sub::Add(args) => assert_eq!(
                args.ids,
                vec![ProductId::new(1), ProductId::new(1), ProductId::new(3)]
            ),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_add_rejects_bad_id() {
        assert!(Harness::try_parse_from(["aythana", "add", "champú"]).is_err());
    }

    #[test]
    fn test_checkout_flags() {
        let Harness { command } =
            Harness::try_parse_from(["aythana", "checkout", "--channel", "mail", "--keep"]).unwrap();
        match command {
            Sub::Checkout(args) => {
                assert_eq!(args.channel, Some(Channel::Email));
                assert_eq!(args.clear_answer(), Some(false));
                assert!(!args.no_open);
            }
            _ => panic!("expected checkout"),
        }
    }

    #[test]
    fn test_clear_conflicts_with_keep() {
        assert!(Harness::try_parse_from(["aythana", "checkout", "--clear", "--keep"]).is_err());
    }

    #[test]
    fn test_open_with_conflicts_with_no_open() {
        assert!(Harness::try_parse_from([
            "aythana", "checkout", "--no-open", "--open-with", "firefox"
        ])
        .is_err());
    }
}
