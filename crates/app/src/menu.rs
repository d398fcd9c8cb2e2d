//! Interactive menu loop
//!
//! Every failure from the core is shown to the user and the menu comes back.
//! Only terminal I/O errors end the loop; end of input counts as Exit.

use std::io::{self, BufRead, ErrorKind, Write};

use duproprio_core::{FilterCriteria, Portal, Property, Repository};

use crate::prompts::Console;
use crate::render;

pub const WELCOME: &str = "Welcome to DuProprio!";
pub const FAREWELL: &str = "DuProprio: find your home, without the pesky agents!";

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    List,
    Filter,
    CreateAccount,
    AddProperty,
    Login,
    Logout,
    Exit,
}

impl Choice {
    /// Map a typed option onto an action; 3 and 4 depend on login state
    pub fn parse(input: &str, authenticated: bool) -> Option<Self> {
        match (input.trim(), authenticated) {
            ("1", _) => Some(Choice::List),
            ("2", _) => Some(Choice::Filter),
            ("3", true) => Some(Choice::AddProperty),
            ("3", false) => Some(Choice::CreateAccount),
            ("4", true) => Some(Choice::Logout),
            ("4", false) => Some(Choice::Login),
            ("5", _) => Some(Choice::Exit),
            _ => None,
        }
    }
}

fn menu_text(authenticated: bool) -> String {
    let (third, fourth) = if authenticated {
        ("3. Add a property", "4. Logout")
    } else {
        ("3. Create an account", "4. Login")
    };
    format!(
        "\nOptions:\n1. List properties\n2. Filter properties\n{third}\n{fourth}\n5. Exit\n"
    )
}

/// Run the menu until Exit or end of input
pub fn run<R, I, O>(portal: &mut Portal<R>, console: &mut Console<I, O>, show_banner: bool) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    if show_banner {
        console.write(&render::banner(WELCOME))?;
    }

    loop {
        match step(portal, console) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    console.say(FAREWELL)
}

/// One menu round; `Ok(false)` when the user chose to leave
fn step<R, I, O>(portal: &mut Portal<R>, console: &mut Console<I, O>) -> io::Result<bool>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    let authenticated = portal.is_authenticated();
    console.write(&menu_text(authenticated))?;
    let input = console.ask("Choose an option: ")?;

    match Choice::parse(&input, authenticated) {
        Some(Choice::List) => list_properties(portal, console)?,
        Some(Choice::Filter) => filter_properties(portal, console)?,
        Some(Choice::CreateAccount) => create_account(portal, console)?,
        Some(Choice::AddProperty) => add_property(portal, console)?,
        Some(Choice::Login) => login(portal, console)?,
        Some(Choice::Logout) => logout(portal, console)?,
        Some(Choice::Exit) => return Ok(false),
        None => console.say("Invalid option.")?,
    }
    Ok(true)
}

fn show_properties<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    properties: &[Property],
    empty_message: &str,
) -> io::Result<()> {
    if properties.is_empty() {
        console.say(empty_message)
    } else {
        console.write(&render::property_table(properties))
    }
}

fn list_properties<R, I, O>(portal: &Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    match portal.list_all() {
        Ok(properties) => show_properties(console, &properties, "No properties available."),
        Err(e) => report(console, e),
    }
}

fn filter_properties<R, I, O>(portal: &Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    let city = console.ask_city(true)?;
    let (min_price, max_price) = console.ask_price_range()?;
    let min_bedrooms = console.ask_count("Minimum bedrooms", true)?;
    let property_type = console.ask_property_type(true)?;

    let criteria = FilterCriteria {
        city,
        property_type,
        min_price,
        max_price,
        min_bedrooms,
    };

    match portal.filter(&criteria) {
        Ok(found) => show_properties(console, &found, "No properties match these criteria."),
        Err(e) => report(console, e),
    }
}

fn create_account<R, I, O>(portal: &Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    let username = console.ask("Username: ")?;
    let password = console.ask("Password: ")?;

    match portal.register(&username, &password) {
        Ok(()) => console.say("Account created."),
        Err(e) => report(console, e),
    }
}

fn login<R, I, O>(portal: &mut Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    let username = console.ask("Username: ")?;
    let password = console.ask("Password: ")?;

    match portal.login(&username, &password) {
        Ok(()) => console.say(&format!("Logged in as {username}.")),
        Err(e) => report(console, e),
    }
}

fn logout<R, I, O>(portal: &mut Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    match portal.logout() {
        Ok(()) => console.say("Logged out."),
        Err(e) => report(console, e),
    }
}

fn add_property<R, I, O>(portal: &Portal<R>, console: &mut Console<I, O>) -> io::Result<()>
where
    R: Repository,
    I: BufRead,
    O: Write,
{
    // Required prompts never return None
    let (Some(price), Some(city), Some(property_type), Some(bedrooms), Some(bathrooms)) = (
        console.ask_price("Price", false)?,
        console.ask_city(false)?,
        console.ask_property_type(false)?,
        console.ask_count("Bedrooms", false)?,
        console.ask_count("Bathrooms", false)?,
    ) else {
        return Ok(());
    };

    let result = Property::new(price, city, property_type, bedrooms, bathrooms)
        .and_then(|property| portal.add_property(property));

    match result {
        Ok(()) => console.say("Property added."),
        Err(e) => report(console, e),
    }
}

fn report<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    error: duproprio_core::Error,
) -> io::Result<()> {
    tracing::debug!(error = %error, "Operation failed");
    console.say(&error.to_string())
}
