// Logbook - core/handlers.rs
//
// Contact assistant command handlers. Each returns either its reply text
// or a `CommandError` naming the failure kind; the dispatcher turns the
// error into its fixed message. Wrong arity is not an error: it yields the
// command's usage line.

use crate::core::contacts::ContactStore;
use crate::util::constants;
use crate::util::error::CommandError;

/// Reply text or the failure kind of one handler call.
pub type HandlerResult = Result<String, CommandError>;

/// `add <name> <phone>`: insert or overwrite.
pub fn add_contact(store: &mut ContactStore, args: &[String]) -> HandlerResult {
    if args.len() != 2 {
        return Ok(constants::ADD_USAGE.to_string());
    }
    let (name, phone) = name_and_phone(args)?;
    store.upsert(name, phone);
    tracing::debug!(name, contacts = store.len(), "Contact added");
    Ok(format!("Contact {name} added with phone number {phone}."))
}

/// `change <name> <new_phone>`: update an existing contact only.
pub fn change_contact(store: &mut ContactStore, args: &[String]) -> HandlerResult {
    if args.len() != 2 {
        return Ok(constants::CHANGE_USAGE.to_string());
    }
    let (name, phone) = name_and_phone(args)?;
    store.update(name, phone)?;
    tracing::debug!(name, "Contact updated");
    Ok(format!("Contact {name} updated with new phone number {phone}."))
}

/// `phone <name>`: look up one contact.
pub fn show_phone(store: &ContactStore, args: &[String]) -> HandlerResult {
    if args.len() != 1 {
        return Ok(constants::PHONE_USAGE.to_string());
    }
    let name = first_arg(args)?;
    let phone = store.phone(name)?;
    Ok(format!("{name}: {phone}"))
}

/// `all`: every contact, one `name: phone` line each, in insertion order.
///
/// Extra arguments are ignored.
pub fn show_all(store: &ContactStore, _args: &[String]) -> HandlerResult {
    if store.is_empty() {
        return Ok(constants::NO_CONTACTS.to_string());
    }
    let lines: Vec<String> = store.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

/// Destructure exactly a name and a phone.
///
/// `add` and `change` check arity first and answer with their usage
/// string, so this only backs that check up.
pub fn name_and_phone(args: &[String]) -> Result<(&str, &str), CommandError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(CommandError::MissingArguments),
    }
}

/// The first positional argument.
///
/// `phone` checks arity first and answers with its usage string, so this
/// only backs that check up.
pub fn first_arg(args: &[String]) -> Result<&str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::InsufficientArguments)
}
