//! Device command handlers.

use tabled::Tabled;

use fixly_core::{Device, Workshop};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Client")]
    client: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Urgency")]
    urgency: String,
    #[tabled(rename = "Received")]
    received: String,
    #[tabled(rename = "Plan")]
    plan: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: util::short_id(d.id),
            client: d.client_name.clone(),
            model: d.device_model.clone(),
            status: d.status.to_string(),
            urgency: d.urgency.to_string(),
            received: d.date_received.format("%Y-%m-%d").to_string(),
            plan: if d.is_planned { "*".into() } else { String::new() },
        }
    }
}

fn detail(d: &Device) -> String {
    let mut lines = vec![
        format!("ID:           {}", d.id),
        format!("Client:       {}", d.client_name),
        format!("Model:        {}", d.device_model),
        format!(
            "Issue:        {}",
            if d.issue_description.is_empty() {
                "-"
            } else {
                &d.issue_description
            }
        ),
        format!("Received:     {}", d.date_received.format("%Y-%m-%d %H:%M")),
        format!("Status:       {}", d.status),
        format!(
            "Status since: {}",
            d.status_changed_at.format("%Y-%m-%d %H:%M")
        ),
        format!("Urgency:      {}", d.urgency),
        format!("Planned:      {}", if d.is_planned { "yes" } else { "no" }),
    ];
    if let Some(ref notes) = d.notes {
        lines.push(format!("Notes:        {notes}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    workshop: &Workshop,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let all = workshop.list_devices().await?;
            let out = output::render_list(&global.output, &all, |d| DeviceRow::from(d), |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Planned => {
            let planned = workshop.planned_devices().await?;
            let out = output::render_list(&global.output, &planned, |d| DeviceRow::from(d), |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Show { id } => {
            let all = workshop.list_devices().await?;
            let device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?;
            let out = output::render_single(&global.output, device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Add {
            client,
            model,
            issue,
            urgency,
            planned,
        } => {
            let mut device = Device::intake(&client, &model, &issue, urgency.into())?;
            device.is_planned = planned;
            workshop.save_device(&device).await?;

            let out = output::render_single(&global.output, &device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::SetStatus { id, status } => {
            let all = workshop.list_devices().await?;
            let mut device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?.clone();

            device.set_status(status.into());
            workshop.save_device(&device).await?;

            let out = output::render_single(&global.output, &device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::SetUrgency { id, urgency } => {
            let all = workshop.list_devices().await?;
            let mut device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?.clone();

            device.urgency = urgency.into();
            workshop.save_device(&device).await?;

            let out = output::render_single(&global.output, &device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Plan { id, remove } => {
            let all = workshop.list_devices().await?;
            let mut device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?.clone();

            device.is_planned = !remove;
            workshop.save_device(&device).await?;

            let out = output::render_single(&global.output, &device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Note { id, text } => {
            let all = workshop.list_devices().await?;
            let mut device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?.clone();

            device.notes = if text.trim().is_empty() {
                None
            } else {
                Some(text)
            };
            workshop.save_device(&device).await?;

            let out = output::render_single(&global.output, &device, detail, |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        DevicesCommand::Delete { id } => {
            let all = workshop.list_devices().await?;
            let device = util::resolve(&all, |d| d.id, &id, "device", "devices list")?;

            let action = format!(
                "Delete device {} ({} / {})",
                util::short_id(device.id),
                device.client_name,
                device.device_model
            );
            if !util::confirm(&action, global.yes)? {
                return Ok(());
            }

            workshop.delete_device(device.id).await?;
            output::print_output(&format!("Deleted device {}", device.id), global.quiet);
        }
    }

    Ok(())
}
