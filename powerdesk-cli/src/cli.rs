//! Command-line surface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use powerdesk_fields::{FieldType, StageColor};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// CLI wrapper for `FieldType`, which doesn't derive ValueEnum itself.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum FieldTypeArg {
    Text,
    Number,
    Currency,
    Email,
    Phone,
    Date,
    Select,
    Multiselect,
    Checkbox,
    Textarea,
    Auto,
}

impl From<FieldTypeArg> for FieldType {
    fn from(arg: FieldTypeArg) -> Self {
        match arg {
            FieldTypeArg::Text => FieldType::Text,
            FieldTypeArg::Number => FieldType::Number,
            FieldTypeArg::Currency => FieldType::Currency,
            FieldTypeArg::Email => FieldType::Email,
            FieldTypeArg::Phone => FieldType::Phone,
            FieldTypeArg::Date => FieldType::Date,
            FieldTypeArg::Select => FieldType::Select,
            FieldTypeArg::Multiselect => FieldType::MultiSelect,
            FieldTypeArg::Checkbox => FieldType::Checkbox,
            FieldTypeArg::Textarea => FieldType::Textarea,
            FieldTypeArg::Auto => FieldType::Auto,
        }
    }
}

/// CLI wrapper for the stage color palette.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum StageColorArg {
    #[default]
    Gray,
    Blue,
    Yellow,
    Purple,
    Green,
    Red,
    Orange,
}

impl From<StageColorArg> for StageColor {
    fn from(arg: StageColorArg) -> Self {
        match arg {
            StageColorArg::Gray => StageColor::Gray,
            StageColorArg::Blue => StageColor::Blue,
            StageColorArg::Yellow => StageColor::Yellow,
            StageColorArg::Purple => StageColor::Purple,
            StageColorArg::Green => StageColor::Green,
            StageColorArg::Red => StageColor::Red,
            StageColorArg::Orange => StageColor::Orange,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "powerdesk")]
#[command(version)]
#[command(about = "Administer PowerDesk entity configurations")]
#[command(long_about = "
Administer the PowerDesk field registry from the command line: list the
module directory, inspect entity configurations, and add, remove or reorder
fields and workflow stages. Configurations live as YAML files under the
store root; every successful change is written atomically.
")]
pub struct Cli {
    /// Store root directory
    #[arg(long, default_value = ".powerdesk", global = true)]
    pub root: String,

    /// Output format for commands that print data
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the module directory
    Modules,

    /// Show an entity configuration
    Show { module: String, entity: String },

    /// Field operations
    Field {
        #[command(subcommand)]
        command: FieldCommand,
    },

    /// Workflow stage operations
    Stage {
        #[command(subcommand)]
        command: StageCommand,
    },

    /// Set exactly which fields appear in the list view
    ListFields {
        module: String,
        entity: String,
        /// Field names, in any order; display order still governs columns
        names: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FieldCommand {
    /// Add a field
    Add {
        module: String,
        entity: String,
        /// Field name; normalized to a lower-case slug
        #[arg(long)]
        name: String,
        #[arg(long)]
        label: String,
        #[arg(long, value_enum, default_value_t = FieldTypeArg::Text)]
        field_type: FieldTypeArg,
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        required: bool,
        #[arg(long)]
        readonly: bool,
        /// Also show in the list view
        #[arg(long)]
        list: bool,
        /// Option label, repeatable; only for select/multiselect
        #[arg(long = "option")]
        options: Vec<String>,
        #[arg(long)]
        default_value: Option<String>,
    },

    /// Remove a field. Irreversible once saved.
    Remove {
        module: String,
        entity: String,
        name: String,
        /// Confirm the irreversible removal
        #[arg(long)]
        yes: bool,
    },

    /// Move a field within its section (positions are section-relative)
    Move {
        module: String,
        entity: String,
        #[arg(long, default_value = "General")]
        section: String,
        from: usize,
        to: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum StageCommand {
    /// Append a workflow stage
    Add {
        module: String,
        entity: String,
        #[arg(long)]
        label: String,
        /// Stage value slug; derived from the label when omitted
        #[arg(long)]
        value: Option<String>,
        #[arg(long, value_enum, default_value_t = StageColorArg::Gray)]
        color: StageColorArg,
    },

    /// Move a stage to a new position
    Move {
        module: String,
        entity: String,
        from: usize,
        to: usize,
    },

    /// Deactivate a stage (kept for historical records)
    Deactivate {
        module: String,
        entity: String,
        value: String,
    },
}
