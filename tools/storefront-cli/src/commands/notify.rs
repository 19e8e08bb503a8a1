//! Notification commands.

use anyhow::{anyhow, bail, Context as _, Result};
use chrono::Utc;
use storefront_commerce::notifications::{NotificationCenter, NotificationKind};
use storefront_commerce::NotificationId;

use super::{NotifyArgs, NotifyCommand};
use crate::context::Context;
use crate::output::kind_badge;

/// Run the notify command.
pub fn run(args: NotifyArgs, ctx: &Context) -> Result<()> {
    let settings = &ctx.storefront().notifications;
    if !ctx.storefront().features.notifications {
        bail!("Notifications are disabled in the configuration");
    }

    let store = ctx.open_store()?;
    let mut center = NotificationCenter::load(&store, &settings.storage_key, settings.badge_cap)?;

    let changed = match args.command {
        NotifyCommand::Show {
            title,
            message,
            kind,
            duration,
        } => {
            let kind = NotificationKind::parse(&kind)
                .ok_or_else(|| anyhow!("Unknown notification kind: {}", kind))?;
            let toast = center.show(
                title,
                message,
                kind,
                duration.unwrap_or(settings.toast_duration_ms),
            );

            if ctx.output.is_json() {
                ctx.output.json(&toast.notification);
            } else {
                println!(
                    "{} {}\n  {}",
                    kind_badge(kind),
                    toast.notification.title,
                    toast.notification.message
                );
                if let Some(after) = toast.auto_dismiss {
                    ctx.output
                        .debug(&format!("Dismissed after {} ms", after.as_millis()));
                }
            }
            true
        }
        NotifyCommand::List => {
            list(&center, ctx);
            false
        }
        NotifyCommand::Read { id } => {
            let id: NotificationId = id
                .parse()
                .with_context(|| format!("Invalid notification id: {}", id))?;
            if !center.mark_as_read(id) {
                bail!("No notification with id {}", id);
            }
            ctx.output.success(&format!("Notificação {} marcada como lida", id));
            true
        }
        NotifyCommand::ReadAll => {
            center.mark_all_as_read();
            ctx.output.success("Todas as notificações marcadas como lidas");
            true
        }
        NotifyCommand::Clear => {
            center.clear_all();
            ctx.output.success("Notificações limpas");
            true
        }
    };

    if changed {
        center.save(&store, &settings.storage_key)?;
        ctx.save_store(&store)?;
    }
    Ok(())
}

fn list(center: &NotificationCenter, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&center.notifications());
        return;
    }

    let badge = center
        .badge()
        .map(|b| format!(" ({} não lidas)", b))
        .unwrap_or_default();
    ctx.output.header(&format!("Notificações{}", badge));

    if center.is_empty() {
        ctx.output.info("Nenhuma notificação");
        return;
    }

    let now = Utc::now();
    for notification in center.notifications() {
        let marker = if notification.read { " " } else { "●" };
        println!(
            "  {} {} [{}] {}  {}",
            marker,
            kind_badge(notification.kind),
            notification.id,
            notification.title,
            console::style(notification.time_ago(now)).dim()
        );
        println!("      {}", notification.message);
    }
}
