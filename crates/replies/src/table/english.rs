//! Built-in English templates.

use crate::table::Template;
use crate::table::markup::{emphasis, smiley};
use crate::types::ReplyKind;

const HELP_MODERATOR: &str = "<i>Moderators can use the following commands</i>:
  /modhelp - show this text
  /modsay &lt;message&gt; - send an official moderator message

<i>Or reply to a message and use</i>:
  /info - get info about the user that sent this message
  /warn - warn the user that sent this message (cooldown)
  /delete - delete a message and warn the user
  /remove - delete a message without a cooldown/warning";

const HELP_ADMIN: &str = "<i>Admins can use the following commands</i>:
  /adminhelp - show this text
  /adminsay &lt;message&gt; - send an official admin message
  /motd &lt;message&gt; - set the welcome message (HTML formatted)
  /uncooldown &lt;id | username&gt; - remove cooldown from a user
  /mod &lt;username&gt; - promote a user to the moderator rank
  /admin &lt;username&gt; - promote a user to the admin rank
  /cleanup - mass delete messages by currently banned users

<i>Or reply to a message and use</i>:
  /blacklist [reason] - blacklist the user who sent this message";

/// The English template for `kind`.
pub(super) fn template(kind: ReplyKind) -> Template {
    match kind {
        ReplyKind::Custom => Template::text("{text}"),
        ReplyKind::Success => Template::text("☑"),
        ReplyKind::BooleanConfig => Template::computed(|fields| {
            let state = if fields.flag("enabled")? {
                "enabled"
            } else {
                "disabled"
            };
            Ok(format!("<b>{{description!x}}</b>: {state}"))
        }),

        ReplyKind::ChatJoin => em("You joined the chat!"),
        ReplyKind::ChatLeave => em("You left the chat!"),
        ReplyKind::UserInChat => em("You're already in the chat."),
        ReplyKind::UserNotInChat => em("You're not in the chat yet. Use /start to join!"),
        ReplyKind::GivenCooldown => Template::computed(|fields| {
            let clause = if fields.flag("deleted")? {
                " (message also deleted)"
            } else {
                ""
            };
            Ok(emphasis(&format!(
                "You've been handed a cooldown of {{duration!d}} for this message{clause}"
            )))
        }),
        ReplyKind::MessageDeleted => em(
            "Your message has been deleted. No cooldown has been given this time, \
             but refrain from posting it again.",
        ),
        ReplyKind::DeletionQueued => Template::computed(|fields| {
            let noun = if fields.number("count")? == 1 {
                "message"
            } else {
                "messages"
            };
            Ok(emphasis(&format!(
                "{{count}} {noun} matched, deletion was queued."
            )))
        }),
        ReplyKind::PromotedCitizen => {
            em("You have been promoted to citizen.\nYou may now send stickers.")
        }
        ReplyKind::PromotedPartisan => {
            em("You have been promoted to partisan.\nYou may now send media.")
        }
        ReplyKind::PromotedMod => {
            em("You've been promoted to moderator, run /modhelp for a list of commands.")
        }
        ReplyKind::PromotedAdmin => {
            em("You've been promoted to admin, run /adminhelp for a list of commands.")
        }
        ReplyKind::KarmaThankYou => em(
            "Message review received.\nThat user's social credit has been updated accordingly.",
        ),
        ReplyKind::KarmaGoodNotification => em(
            "A peer liked this, your social credit has increased (check /id to see your \
             social credit or /toggleCredit to turn these notifications off)",
        ),
        ReplyKind::KarmaBadNotification => em(
            "A peer disliked this, your social credit has decreased (check /id to see your \
             social credit or /toggleCredit to turn these notifications off)",
        ),
        ReplyKind::TripcodeInfo => Template::computed(|fields| {
            let value = if fields.require("tripcode")?.is_null() {
                "unset"
            } else {
                "<code>{tripcode!x}</code>"
            };
            Ok(format!("<b>tripcode</b>: {value}"))
        }),
        ReplyKind::TripcodeSet => Template::text(format!(
            "{}<b>{{tripname!x}}</b> <code>{{tripcode!x}}</code>",
            emphasis("Tripcode set. It will appear as: ")
        )),

        ReplyKind::ErrCommandDisabled => em("This command has been disabled."),
        ReplyKind::ErrNoReply => em("You need to reply to a message to use this command."),
        ReplyKind::ErrNotInCache => em(
            "Message not found in cache... ({id_refresh_interval}h passed or bot was restarted)",
        ),
        ReplyKind::ErrNoUser => em("No user found by that name!"),
        ReplyKind::ErrNoUserById => em(
            "No user found by that id! Note that all ids rotate every {id_refresh_interval} hours.",
        ),
        ReplyKind::ErrAlreadyWarned => em("A warning has already been issued for this message."),
        ReplyKind::ErrNotInCooldown => em("This user is not in a cooldown right now."),
        ReplyKind::ErrCooldown => em("Your cooldown expires at {until!t}"),
        ReplyKind::ErrBlacklisted => Template::computed(|fields| {
            let reason = if fields.flag("reason")? {
                " for {reason!x}"
            } else {
                ""
            };
            let mut text = emphasis(&format!("You've been blacklisted{reason}"));
            if fields.flag("contact")? {
                text.push_str(&emphasis("\ncontact:"));
                text.push_str(" {contact}");
            }
            Ok(text)
        }),
        ReplyKind::ErrAlreadyVoted => em("You have already reviewed this message."),
        ReplyKind::ErrVoteOwnMessage => em("You can't inform on your own message."),
        ReplyKind::ErrSpammy => em(
            "Your message has not been sent. Avoid sending messages too fast, try again later.",
        ),
        ReplyKind::ErrSpammySign => em(
            "Your message has not been sent. Avoid using /sign too often, try again later.",
        ),
        ReplyKind::ErrSignPrivacy => em(
            "Your account privacy settings prevent usage of the sign feature. \
             Enable linked forwards first.",
        ),
        ReplyKind::ErrInvalidTripFormat => Template::text(format!(
            "{}<code>name#pass</code>{}",
            emphasis("Given tripcode is not valid, the format is "),
            emphasis(".")
        )),
        ReplyKind::ErrNoTripcode => em("You don't have a tripcode set."),
        ReplyKind::ErrMediaLimit => {
            em("You can't send media or forward messages at this time, try again later.")
        }
        ReplyKind::ErrNoMediaAllowed => em("You can't send media or forward messages to this bot."),
        ReplyKind::ErrMediaPermission => em("You don't have permission to send {kind}."),

        ReplyKind::NotifBadwordValue => em(
            "{filtername!x} filters:\n'{badword!x}' will be replaced by '{replacement!x}'",
        ),
        ReplyKind::NotifSetBadword => em(
            "{filtername!x} successfully set:\n'{badword!x}' will be replaced by '{replacement!x}'",
        ),
        ReplyKind::NotifRemoveBadword => {
            em("{filtername!x} successfully removed:\n'{badword!x}' is now unfiltered")
        }

        ReplyKind::UserInfo => Template::computed(|fields| {
            let warnings = fields.number("warnings")?;
            let expiry = if warnings > 0 {
                " (one warning will be removed on {warnExpiry!t})"
            } else {
                ""
            };
            Ok(format!(
                "<b>id</b>: {{id}}, <b>username</b>: citizen, <b>rank</b>: {{rank_i}} ({{rank}})\n\
                 <b>social credit</b>: +{{positiveKarma}} | -{{negativeKarma}}\n\
                 <b>warnings</b>: {{warnings}} {smiley}{expiry}, <b>cooldown</b>: {cooldown}\n\
                 <b>last active</b>: {{lastActive!t}}",
                smiley = smiley(warnings),
                cooldown = cooldown_clause(fields.flag("cooldown")?),
            ))
        }),
        ReplyKind::UserInfoMod => Template::computed(|fields| {
            Ok(format!(
                "<b>id</b>: {{id}}, <b>username</b>: citizen, <b>rank</b>: n/a, \
                 <b>combined social credit</b>: {{karma}}\n\
                 <b>cooldown</b>: {}",
                cooldown_clause(fields.flag("cooldown")?)
            ))
        }),
        ReplyKind::UserIdRefresh => em(
            "All users have been sent to re-education.\nIdentities have been refreshed.",
        ),
        ReplyKind::UserNewId => Template::text(format!(
            "{}<code>{{id}}</code>",
            emphasis("Your new government generated ID: ")
        )),
        ReplyKind::UsersInfo => Template::text("<b>{count}</b> <i>users</i>"),
        ReplyKind::UsersInfoExtended => Template::text(
            "<b>{active}</b> <i>active</i>, {inactive} <i>inactive and</i> \
             {blacklisted} <i>blacklisted users</i> (<i>total</i>: {total})",
        ),

        ReplyKind::ProgramVersion => Template::text(
            "commielounge-ng v{version} ~ https://github.com/solarbearcub/secretlounge-ng",
        ),
        ReplyKind::HelpModerator => Template::text(HELP_MODERATOR),
        ReplyKind::HelpAdmin => Template::text(HELP_ADMIN),
    }
}

fn em(text: &str) -> Template {
    Template::Static(emphasis(text))
}

fn cooldown_clause(active: bool) -> &'static str {
    if active { "yes, until {cooldown!t}" } else { "no" }
}
