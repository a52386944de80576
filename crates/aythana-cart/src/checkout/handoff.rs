//! Hand-off links to the messaging and email channels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::OrderSummary;
use crate::money::NumberFormat;
use crate::CartError;

/// Email subject before the formatted total.
pub const EMAIL_SUBJECT_PREFIX: &str = "Pedido de Productos Aythana - Total: ";

/// A hand-off channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "whatsapp",
            Channel::Email => "email",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "Correo electrónico (Mail)",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Channel::WhatsApp),
            "email" | "mail" => Ok(Channel::Email),
            _ => Err(CartError::UnknownChannel(s.to_string())),
        }
    }
}

/// Fixed recipients of the hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    /// WhatsApp number in international format, digits only.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            phone: "549380325913".to_string(),
            email: "cristiandanielbastias@yahoo.com.ar".to_string(),
        }
    }
}

/// An outbound link for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffLink {
    pub channel: Channel,
    pub url: String,
}

/// Both hand-off links for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffLinks {
    pub whatsapp: HandoffLink,
    pub email: HandoffLink,
}

impl HandoffLinks {
    /// Build the links for a summary.
    ///
    /// - `https://wa.me/<phone>?text=<text>`
    /// - `mailto:<email>?subject=<subject>&body=<text>`
    pub fn build(summary: &OrderSummary, contact: &ContactDetails, format: &NumberFormat) -> Self {
        // `encode` also escapes `!'()*`; the decoded text is unchanged.
        let text = urlencoding::encode(&summary.text);
        let subject = format!("{}{}", EMAIL_SUBJECT_PREFIX, format.price(summary.total));

        Self {
            whatsapp: HandoffLink {
                channel: Channel::WhatsApp,
                url: format!("https://wa.me/{}?text={}", contact.phone, text),
            },
            email: HandoffLink {
                channel: Channel::Email,
                url: format!(
                    "mailto:{}?subject={}&body={}",
                    contact.email,
                    urlencoding::encode(&subject),
                    text
                ),
            },
        }
    }

    /// The link for a channel.
    pub fn get(&self, channel: Channel) -> &HandoffLink {
        match channel {
            Channel::WhatsApp => &self.whatsapp,
            Channel::Email => &self.email,
        }
    }
}
