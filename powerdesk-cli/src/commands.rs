//! Command handlers. Each handler opens a session over the file store,
//! applies one change cycle, and saves.

use std::sync::Arc;

use powerdesk_fields::{EntityConfig, FieldEditor, ModuleCatalog, StageEditor};
use powerdesk_registry::{ChangeNotifier, ConfigSession, SaveOutcome};
use powerdesk_store::{ConfigStore, FileConfigStore};

use crate::cli::{Cli, Command, FieldCommand, OutputFormat, StageCommand};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn open_session(root: &str) -> ConfigSession {
    let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::new(root));
    ConfigSession::new(store, ChangeNotifier::new(), true)
}

pub async fn run(cli: Cli) -> CommandResult {
    match cli.command {
        Command::Modules => modules(&cli.root, cli.format).await,
        Command::Show { module, entity } => show(&cli.root, cli.format, &module, &entity).await,
        Command::Field { command } => field(&cli.root, command).await,
        Command::Stage { command } => stage(&cli.root, command).await,
        Command::ListFields {
            module,
            entity,
            names,
        } => list_fields(&cli.root, &module, &entity, &names).await,
    }
}

async fn modules(root: &str, format: OutputFormat) -> CommandResult {
    let session = open_session(root);
    let catalog = session.modules().await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&catalog)?),
        OutputFormat::Table => print_catalog(&catalog),
    }
    Ok(())
}

fn print_catalog(catalog: &ModuleCatalog) {
    for (key, entry) in &catalog.modules {
        println!("{key}  ({})", entry.label);
        for (entity_key, entity_label) in &entry.entities {
            println!("  {entity_key}  {entity_label}");
        }
    }
}

async fn show(root: &str, format: OutputFormat, module: &str, entity: &str) -> CommandResult {
    let mut session = open_session(root);
    let config = session.load(module, entity).await?.clone();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&config)?),
        OutputFormat::Table => print_config(&config),
    }
    Ok(())
}

fn print_config(config: &EntityConfig) {
    println!("{}/{}  ({})", config.module, config.entity, config.label());

    for section in config.sections() {
        println!("\n[{section}]");
        for field in config.fields_in_section(section) {
            let mut flags = Vec::new();
            if field.is_required {
                flags.push("required");
            }
            if field.is_effectively_readonly() {
                flags.push("readonly");
            }
            if field.show_in_list {
                flags.push("list");
            }
            if !field.show_in_form {
                flags.push("hidden");
            }
            println!(
                "  {:<3} {:<24} {:<12} {:<24} {}",
                field.display_order,
                field.field_name,
                field.field_type.as_str(),
                field.field_label,
                flags.join(",")
            );
            for option in &field.options {
                println!("        - {} ({})", option.label, option.value);
            }
        }
    }

    if !config.kanban_stages.is_empty() {
        println!("\nstages:");
        for stage in &config.kanban_stages {
            let state = if stage.is_active { "" } else { "  [inactive]" };
            println!("  {:<3} {:<20} {}{}", stage.order, stage.value, stage.label, state);
        }
    }

    let list: Vec<&str> = config
        .list_display_fields()
        .iter()
        .map(|f| f.field_name.as_str())
        .collect();
    if !list.is_empty() {
        println!("\nlist view: {}", list.join(", "));
    }
}

async fn field(root: &str, command: FieldCommand) -> CommandResult {
    match command {
        FieldCommand::Add {
            module,
            entity,
            name,
            label,
            field_type,
            section,
            required,
            readonly,
            list,
            options,
            default_value,
        } => {
            let mut session = open_session(root);
            session.load(&module, &entity).await?;

            let mut editor = FieldEditor::create();
            editor
                .set_name(&name)
                .set_label(&label)
                .set_field_type(field_type.into())
                .set_required(required)
                .set_readonly(readonly)
                .set_show_in_list(list)
                .set_default_value(default_value);
            if let Some(section) = section {
                editor.set_section(section);
            }
            for option in &options {
                if !editor.add_option(option) {
                    eprintln!("warning: option '{option}' ignored (duplicate or typeless)");
                }
            }

            let field = editor.submit()?;
            let name = field.field_name.clone();
            session.submit_field(field)?;
            save_and_report(&mut session, &format!("added field '{name}'")).await
        }
        FieldCommand::Remove {
            module,
            entity,
            name,
            yes,
        } => {
            if !yes {
                return Err(format!(
                    "removing '{name}' cannot be undone once saved; pass --yes to confirm"
                )
                .into());
            }
            let mut session = open_session(root);
            session.load(&module, &entity).await?;
            session.delete_field(&name)?;
            save_and_report(&mut session, &format!("removed field '{name}'")).await
        }
        FieldCommand::Move {
            module,
            entity,
            section,
            from,
            to,
        } => {
            let mut session = open_session(root);
            session.load(&module, &entity).await?;
            session.move_field(&section, from, to)?;
            save_and_report(&mut session, &format!("moved field {from} → {to} in [{section}]"))
                .await
        }
    }
}

async fn stage(root: &str, command: StageCommand) -> CommandResult {
    match command {
        StageCommand::Add {
            module,
            entity,
            label,
            value,
            color,
        } => {
            let mut session = open_session(root);
            session.load(&module, &entity).await?;

            let mut editor = StageEditor::create();
            if let Some(value) = value {
                editor.set_value(&value);
            }
            editor.set_label(&label).set_color(color.into());
            let stage = editor.submit()?;
            let value = stage.value.clone();
            session.add_stage(stage)?;
            save_and_report(&mut session, &format!("added stage '{value}'")).await
        }
        StageCommand::Move {
            module,
            entity,
            from,
            to,
        } => {
            let mut session = open_session(root);
            session.load(&module, &entity).await?;
            session.move_stage(from, to)?;
            save_and_report(&mut session, &format!("moved stage {from} → {to}")).await
        }
        StageCommand::Deactivate {
            module,
            entity,
            value,
        } => {
            let mut session = open_session(root);
            session.load(&module, &entity).await?;
            session.deactivate_stage(&value)?;
            save_and_report(&mut session, &format!("deactivated stage '{value}'")).await
        }
    }
}

async fn list_fields(root: &str, module: &str, entity: &str, names: &[String]) -> CommandResult {
    let mut session = open_session(root);
    session.load(module, entity).await?;
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    session.set_list_fields(&names)?;
    save_and_report(&mut session, &format!("list view set to: {}", names.join(", "))).await
}

async fn save_and_report(session: &mut ConfigSession, action: &str) -> CommandResult {
    match session.save().await? {
        SaveOutcome::Saved => {
            let (module, entity) = session.selection().unwrap_or(("?", "?"));
            println!("{action}; saved {module}/{entity}");
        }
        SaveOutcome::NoChanges => println!("{action}; nothing to save"),
    }
    Ok(())
}
