//! Terminal implementations of the cart UI contracts.

use std::process::Command;
use std::sync::Mutex;

use aythana_cart::checkout::{Channel, CheckoutPrompt, HandoffLink, LinkOpener};
use aythana_cart::display::CountDisplay;
use aythana_cart::feedback::{AckTarget, Tone};
use aythana_cart::CartError;
use console::style;
use dialoguer::{Confirm, Select};
use indicatif::ProgressBar;

use crate::output::Output;

/// Resting label of a product's add button.
pub const ADD_LABEL: &str = "Añadir al carrito";

/// Prompts, link launching and count badge on the terminal.
///
/// Answers given up front (from command-line flags) are used instead of
/// prompting.
pub struct TerminalUi {
    output: Output,
    channel: Option<Channel>,
    clear: Option<bool>,
    open_links: bool,
    launcher: Option<String>,
    notices: Vec<String>,
    /// Last rendered count, for callers that draw their own header.
    pub count: u64,
}

impl TerminalUi {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            channel: None,
            clear: None,
            open_links: true,
            launcher: None,
            notices: Vec::new(),
            count: 0,
        }
    }

    /// Answer the channel question without prompting.
    pub fn with_channel(mut self, channel: Option<Channel>) -> Self {
        self.channel = channel;
        self
    }

    /// Answer the clear question without prompting.
    pub fn with_clear(mut self, clear: Option<bool>) -> Self {
        self.clear = clear;
        self
    }

    /// Print links instead of launching them.
    pub fn with_open_links(mut self, open: bool) -> Self {
        self.open_links = open;
        self
    }

    /// Open links with `program <url>` instead of the platform handler.
    pub fn with_launcher(mut self, program: impl Into<String>) -> Self {
        self.launcher = Some(program.into());
        self
    }

    /// Notices shown so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    fn launcher(&self, url: &str) -> Command {
        match self.launcher {
            Some(ref program) => {
                let mut cmd = Command::new(program);
                cmd.arg(url);
                cmd
            }
            None => platform_launcher(url),
        }
    }
}

impl CheckoutPrompt for TerminalUi {
    fn notify(&mut self, message: &str) -> Result<(), CartError> {
        self.output.warn(message);
        self.notices.push(message.to_string());
        Ok(())
    }

    fn choose_channel(&mut self, message: &str) -> Result<Channel, CartError> {
        if let Some(channel) = self.channel {
            return Ok(channel);
        }

        self.output.text(message);
        let channels = [Channel::WhatsApp, Channel::Email];
        let items: Vec<&str> = channels.iter().map(|c| c.display_name()).collect();
        let selection = Select::new()
            .with_prompt("Enviar por")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| CartError::Prompt(e.to_string()))?;

        Ok(channels[selection])
    }

    fn confirm_clear(&mut self, message: &str) -> Result<bool, CartError> {
        if let Some(clear) = self.clear {
            return Ok(clear);
        }

        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| CartError::Prompt(e.to_string()))
    }
}

impl LinkOpener for TerminalUi {
    fn open_link(&mut self, link: &HandoffLink) -> Result<(), CartError> {
        if !self.open_links {
            self.output.kv(link.channel.display_name(), &link.url);
            return Ok(());
        }

        self.output.debug(&format!("Opening {}", link.url));
        // The handlers hand off to the browser or mail client and return, so
        // waiting here reaps the child.
        let status = self
            .launcher(&link.url)
            .status()
            .map_err(|e| CartError::OpenLink(format!("{}: {}", link.channel, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(CartError::OpenLink(format!("{}: launcher exited with {}", link.channel, status)))
        }
    }
}

impl CountDisplay for TerminalUi {
    fn render(&mut self, count: u64, visible: bool) {
        self.count = count;
        self.output.badge(count, visible);
    }
}

/// Platform command that opens a URL with the default handler.
fn platform_launcher(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// A product's add button.
///
/// Holds its own label and tone; when attached to a status bar, every change
/// is redrawn there as well.
pub struct ProductButton {
    label: Mutex<String>,
    tone: Mutex<Tone>,
    bar: Option<ProgressBar>,
}

impl ProductButton {
    pub fn new() -> Self {
        Self {
            label: Mutex::new(ADD_LABEL.to_string()),
            tone: Mutex::new(Tone::Primary),
            bar: None,
        }
    }

    /// Mirror the button onto a status bar.
    pub fn with_bar(mut self, bar: ProgressBar) -> Self {
        self.redraw_on(&bar, ADD_LABEL, Tone::Primary);
        self.bar = Some(bar);
        self
    }

    /// Current tone.
    pub fn tone(&self) -> Tone {
        *self.tone.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Stop drawing to the status bar, leaving the last label on screen.
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish();
        }
    }

    fn redraw(&self) {
        if let Some(ref bar) = self.bar {
            self.redraw_on(bar, &self.label(), self.tone());
        }
    }

    fn redraw_on(&self, bar: &ProgressBar, label: &str, tone: Tone) {
        bar.set_message(paint(label, tone));
        bar.tick();
    }
}

impl Default for ProductButton {
    fn default() -> Self {
        Self::new()
    }
}

impl AckTarget for ProductButton {
    fn label(&self) -> String {
        self.label.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.lock().unwrap_or_else(|p| p.into_inner()) = label.to_string();
        self.redraw();
    }

    fn set_tone(&self, tone: Tone) {
        *self.tone.lock().unwrap_or_else(|p| p.into_inner()) = tone;
        self.redraw();
    }
}

fn paint(label: &str, tone: Tone) -> String {
    match tone {
        Tone::Primary => style(label).blue().to_string(),
        Tone::Success => style(label).green().bold().to_string(),
    }
}
