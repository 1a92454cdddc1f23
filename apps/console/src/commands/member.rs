//! Membership commands.

use std::io::{BufRead, Write};
use tracing::debug;

use coop_core::{NewMember, Store};

use super::format_member;
use crate::error::{describe, ConsoleResult};
use crate::prompt::Prompter;

/// 1: enroll a member.
pub fn enroll<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let name = prompter.token("Enter member name:")?;
    let address = prompter.token("Enter address:")?;
    let phone = prompter.token("Enter phone:")?;
    let fee = prompter.money("Enter fee paid:")?;

    let member = store.enroll_member(NewMember {
        name,
        address,
        phone,
        fee,
    });
    prompter.say(format!("Member {} enrolled with id {}.", member.name, member.id))
}

/// 2: remove a member.
pub fn remove<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let member_id = prompter.token("Enter member id:")?;

    match store.remove_member(&member_id) {
        Ok(member) => prompter.say(format!("Member {} ({}) removed.", member.id, member.name)),
        Err(err) => prompter.say(describe(&err)),
    }
}

/// 8: members whose name starts with the entered text.
pub fn info<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let prefix = prompter.token("Enter the start of the member's name:")?;
    let members = store.member_info(&prefix);
    debug!(prefix = %prefix, matches = members.len(), "Member lookup");

    if members.is_empty() {
        return prompter.say("No member has a name starting with that.");
    }
    for member in &members {
        prompter.say(format_member(member))?;
    }
    Ok(())
}

/// 11: every member.
pub fn list<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let members = store.members();
    if members.is_empty() {
        return prompter.say("There are no members.");
    }
    for member in &members {
        prompter.say(format_member(member))?;
    }
    Ok(())
}
