//! One line of user input → one typed action.

use std::path::PathBuf;

use shared::domain::{CategoryId, OfferId, ShopId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Home,
    Category(CategoryId),
    Shop(ShopId),
    Back,
    Lock,
    Password(String),
    Login,
    Cancel,
    Banner(PathBuf),
    OfferImage(OfferId, PathBuf),
    OfferName(OfferId, String),
    OfferPrice(OfferId, String),
    Save,
    Share,
    Map,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("unknown action '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{action}' is missing its {argument}")]
    MissingArgument {
        action: &'static str,
        argument: &'static str,
    },
}

pub const HELP: &str = "\
home | category <id> | shop <id> | back | share | map | show
lock | password <text> | login | cancel
banner <path> | offer-image <offer> <path> | offer-name <offer> <text> | offer-price <offer> <amount> | save
help | quit";

/// Blank input parses to `None`.
pub fn parse_action(line: &str) -> Result<Option<UserAction>, ActionParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "home" => UserAction::Home,
        "category" => UserAction::Category(CategoryId::new(required(rest, "category", "id")?)),
        "shop" => UserAction::Shop(ShopId::new(required(rest, "shop", "id")?)),
        "back" => UserAction::Back,
        "lock" => UserAction::Lock,
        "password" => UserAction::Password(rest.to_string()),
        "login" => UserAction::Login,
        "cancel" => UserAction::Cancel,
        "banner" => UserAction::Banner(PathBuf::from(required(rest, "banner", "path")?)),
        "offer-image" => {
            let (offer, path) = offer_and_value(rest, "offer-image", "path")?;
            UserAction::OfferImage(offer, PathBuf::from(path))
        }
        "offer-name" => {
            let (offer, name) = offer_and_value(rest, "offer-name", "name")?;
            UserAction::OfferName(offer, name.to_string())
        }
        "offer-price" => {
            let (offer, price) = offer_and_value(rest, "offer-price", "amount")?;
            UserAction::OfferPrice(offer, price.to_string())
        }
        "save" => UserAction::Save,
        "share" => UserAction::Share,
        "map" => UserAction::Map,
        "show" => UserAction::Show,
        "help" | "?" => UserAction::Help,
        "quit" | "exit" => UserAction::Quit,
        other => return Err(ActionParseError::Unknown(other.to_string())),
    };

    Ok(Some(action))
}

fn required<'a>(
    rest: &'a str,
    action: &'static str,
    argument: &'static str,
) -> Result<&'a str, ActionParseError> {
    if rest.is_empty() {
        Err(ActionParseError::MissingArgument { action, argument })
    } else {
        Ok(rest)
    }
}

fn offer_and_value<'a>(
    rest: &'a str,
    action: &'static str,
    argument: &'static str,
) -> Result<(OfferId, &'a str), ActionParseError> {
    let rest = required(rest, action, "offer id")?;
    let (offer, value) = rest
        .split_once(char::is_whitespace)
        .map(|(offer, value)| (offer, value.trim()))
        .unwrap_or((rest, ""));
    Ok((OfferId::new(offer), required(value, action, argument)?))
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
