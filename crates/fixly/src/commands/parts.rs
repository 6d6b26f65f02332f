//! Parts inventory command handlers.

use tabled::Tabled;

use fixly_core::{SparePart, Workshop};

use crate::cli::{GlobalOpts, PartsArgs, PartsCommand, StockArg};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PartRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    ptype: String,
    #[tabled(rename = "Subtype")]
    subtype: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Stock")]
    stock: String,
}

impl From<&SparePart> for PartRow {
    fn from(p: &SparePart) -> Self {
        Self {
            id: util::short_id(p.id),
            name: p.name.clone(),
            ptype: p.part_type.to_string(),
            subtype: p.subtype.clone().unwrap_or_default(),
            quantity: p.quantity,
            stock: if p.in_stock { "in".into() } else { "to buy".into() },
        }
    }
}

fn detail(p: &SparePart) -> String {
    [
        format!("ID:       {}", p.id),
        format!("Name:     {}", p.name),
        format!("Type:     {}", p.part_type),
        format!("Subtype:  {}", p.subtype.as_deref().unwrap_or("-")),
        format!("Quantity: {}", p.quantity),
        format!(
            "Stock:    {}",
            if p.in_stock { "in stock" } else { "to buy" }
        ),
    ]
    .join("\n")
}

#[derive(Tabled, serde::Serialize)]
struct SubtypeRow {
    #[tabled(rename = "Subtype")]
    subtype: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    workshop: &Workshop,
    args: PartsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PartsCommand::List => {
            let all = workshop.list_parts().await?;
            let out =
                output::render_list(&global.output, &all, |p| PartRow::from(p), |p| p.id.to_string());
            output::print_output(&out, global.quiet);
        }

        PartsCommand::ToBuy => {
            let shopping = workshop.parts_to_buy().await?;
            let out = output::render_list(&global.output, &shopping, |p| PartRow::from(p), |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        PartsCommand::Add {
            name,
            part_type,
            subtype,
            quantity,
        } => {
            let part = SparePart::intake(&name, part_type.into(), subtype, quantity)?;
            workshop.save_part(&part).await?;

            let out =
                output::render_single(&global.output, &part, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
        }

        PartsCommand::SetQuantity { id, quantity } => {
            let all = workshop.list_parts().await?;
            let mut part = util::resolve(&all, |p| p.id, &id, "part", "parts list")?.clone();

            part.quantity = quantity;
            workshop.save_part(&part).await?;

            let out =
                output::render_single(&global.output, &part, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
        }

        PartsCommand::SetStock { id, stock } => {
            let all = workshop.list_parts().await?;
            let mut part = util::resolve(&all, |p| p.id, &id, "part", "parts list")?.clone();

            part.in_stock = matches!(stock, StockArg::In);
            workshop.save_part(&part).await?;

            let out =
                output::render_single(&global.output, &part, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
        }

        PartsCommand::Subtypes { part_type } => {
            let part_type: fixly_core::PartType = part_type.into();
            let subtypes: Vec<SubtypeRow> = part_type
                .subtypes()
                .iter()
                .map(|s| SubtypeRow {
                    subtype: (*s).to_owned(),
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &subtypes,
                |s| SubtypeRow {
                    subtype: s.subtype.clone(),
                },
                |s| s.subtype.clone(),
            );
            output::print_output(&out, global.quiet);
        }

        PartsCommand::Delete { id } => {
            let all = workshop.list_parts().await?;
            let part = util::resolve(&all, |p| p.id, &id, "part", "parts list")?;

            let action = format!("Delete part {} ({})", util::short_id(part.id), part.name);
            if !util::confirm(&action, global.yes)? {
                return Ok(());
            }

            workshop.delete_part(part.id).await?;
            output::print_output(&format!("Deleted part {}", part.id), global.quiet);
        }
    }

    Ok(())
}
