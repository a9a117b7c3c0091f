use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use classifieds_core::{
    entities::*,
    moderation::Decision,
    usecases::{self, NewCategory, NewSubcategory, UpdateUser, ValidationError},
};

use crate::{print, session::Session};

#[derive(Parser)]
#[command(name = "classifieds-admin")]
#[command(about = "Administration of the classifieds platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the logged in manager
    Me,

    /// Manage user accounts
    #[command(subcommand)]
    Users(UsersCommand),

    /// Browse and moderate ads
    #[command(subcommand)]
    Ads(AdsCommand),

    /// Manage categories
    #[command(subcommand)]
    Categories(CategoriesCommand),

    /// Manage subcategories
    #[command(subcommand)]
    Subcategories(SubcategoriesCommand),
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List all users
    List,

    /// Show a single user
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Update the name or the activation of a user
    Update {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Activate (true) or deactivate (false) the account
        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },
}

#[derive(Subcommand)]
pub enum AdsCommand {
    /// List ads with their current version
    List {
        /// Only ads that await moderation
        #[arg(long)]
        pending: bool,
    },

    /// Show an ad including all of its versions
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Approve the pending version of an ad
    Approve {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Reject the pending version of an ad
    Reject {
        #[arg(value_name = "ID")]
        id: u64,

        /// Shown to the owner of the ad
        #[arg(short, long)]
        reason: String,
    },
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    /// List all categories and their subcategories
    List,

    /// Create a new category
    Create {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Rename or describe a category
    Update {
        #[arg(value_name = "ID")]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SubcategoriesCommand {
    /// List all subcategories
    List,

    /// Create a new subcategory
    Create {
        #[arg(value_name = "NAME")]
        name: String,

        /// ID of the parent category
        #[arg(long, value_name = "ID")]
        category: u64,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Rename, describe or move a subcategory
    Update {
        #[arg(value_name = "ID")]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// ID of the new parent category
        #[arg(long, value_name = "ID")]
        category: Option<u64>,
    },
}

pub fn run(session: &Session, command: Command) -> Result<()> {
    match command {
        Command::Me => print::user(session.user()),
        Command::Users(cmd) => users(session, cmd)?,
        Command::Ads(cmd) => ads(session, cmd)?,
        Command::Categories(cmd) => categories(session, cmd)?,
        Command::Subcategories(cmd) => subcategories(session, cmd)?,
    }
    Ok(())
}

fn users(session: &Session, cmd: UsersCommand) -> Result<()> {
    let api = session.api();
    match cmd {
        UsersCommand::List => {
            print::users(&usecases::list_users(api)?);
        }
        UsersCommand::Show { id } => {
            print::user(&usecases::get_user(api, &id.into())?);
        }
        UsersCommand::Update {
            id,
            first_name,
            last_name,
            active,
        } => {
            let id = UserId::from(id);
            let user = usecases::get_user(api, &id)?;
            let mut update = UpdateUser::from(&user);
            if let Some(first_name) = first_name {
                update.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                update.last_name = last_name;
            }
            if let Some(active) = active {
                update.is_active = active;
            }
            print::user(&usecases::update_user(api, &id, update)?);
        }
    }
    Ok(())
}

fn ads(session: &Session, cmd: AdsCommand) -> Result<()> {
    let api = session.api();
    match cmd {
        AdsCommand::List { pending } => {
            let ads = if pending {
                usecases::list_pending_ads(api)?
            } else {
                usecases::list_ads(api)?
            };
            print::ads(&ads);
        }
        AdsCommand::Show { id } => {
            print::ad(&usecases::get_ad(api, id.into())?);
        }
        AdsCommand::Approve { id } => moderate(session, id.into(), Decision::Approve)?,
        AdsCommand::Reject { id, reason } => moderate(session, id.into(), Decision::reject(reason))?,
    }
    Ok(())
}

fn moderate(session: &Session, id: Id, decision: Decision) -> Result<()> {
    let api = session.api();
    let mut ad = usecases::get_ad(api, id)?;
    let version = usecases::moderate_ad(api, &ad, decision)?;
    log::info!(
        "{} {} of ad {} as {}",
        version.status,
        version.version_number,
        ad.id,
        session.user().full_name()
    );
    usecases::merge_moderated_version(&mut ad, version)?;
    print::ad(&ad);
    Ok(())
}

fn categories(session: &Session, cmd: CategoriesCommand) -> Result<()> {
    let api = session.api();
    match cmd {
        CategoriesCommand::List => {
            print::categories(&usecases::list_categories(api)?);
        }
        CategoriesCommand::Create { name, description } => {
            let created = usecases::create_category(api, NewCategory { name, description })?;
            print::categories(&[created]);
        }
        CategoriesCommand::Update {
            id,
            name,
            description,
        } => {
            let id = Id::from(id);
            let existing = usecases::list_categories(api)?
                .into_iter()
                .find(|c| c.id == id)
                .ok_or(usecases::Error::NotFound)?;
            let category = NewCategory {
                name: name.unwrap_or(existing.name),
                description: description.unwrap_or(existing.description),
            };
            let updated = usecases::update_category(api, id, category)?;
            print::categories(&[updated]);
        }
    }
    Ok(())
}

fn subcategories(session: &Session, cmd: SubcategoriesCommand) -> Result<()> {
    let api = session.api();
    match cmd {
        SubcategoriesCommand::List => {
            print::subcategories(&usecases::list_subcategories(api)?);
        }
        SubcategoriesCommand::Create {
            name,
            category,
            description,
        } => {
            let subcategory = NewSubcategory {
                name,
                description,
                category_id: category.into(),
            };
            let created = usecases::create_subcategory(api, subcategory)?;
            print::subcategories(&[created]);
        }
        SubcategoriesCommand::Update {
            id,
            name,
            description,
            category,
        } => {
            let id = Id::from(id);
            let existing = usecases::list_subcategories(api)?
                .into_iter()
                .find(|s| s.id == id)
                .ok_or(usecases::Error::NotFound)?;
            let category_id = category
                .map(Id::from)
                .or_else(|| existing.category.as_ref().map(|c| c.id))
                .ok_or(ValidationError::Category)?;
            let subcategory = NewSubcategory {
                name: name.unwrap_or(existing.name),
                description: description.unwrap_or(existing.description),
                category_id,
            };
            let updated = usecases::update_subcategory(api, id, subcategory)?;
            print::subcategories(&[updated]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_rejection() {
        let cli = Cli::parse_from([
            "classifieds-admin",
            "ads",
            "reject",
            "42",
            "--reason",
            "Prohibited item",
            "--config",
            "admin.toml",
        ]);
        assert_eq!(Some(PathBuf::from("admin.toml")), cli.config);
        match cli.command {
            Command::Ads(AdsCommand::Reject { id, reason }) => {
                assert_eq!(42, id);
                assert_eq!("Prohibited item", reason);
            }
            _ => panic!("Unexpected command"),
        }
    }

    #[test]
    fn rejection_requires_reason() {
        assert!(Cli::try_parse_from(["classifieds-admin", "ads", "reject", "42"]).is_err());
    }

    #[test]
    fn parse_user_deactivation() {
        let cli = Cli::parse_from([
            "classifieds-admin",
            "users",
            "update",
            "c0ffee",
            "--active",
            "false",
        ]);
        match cli.command {
            Command::Users(UsersCommand::Update {
                id,
                first_name,
                active,
                ..
            }) => {
                assert_eq!("c0ffee", id);
                assert_eq!(None, first_name);
                assert_eq!(Some(false), active);
            }
            _ => panic!("Unexpected command"),
        }
    }

    #[test]
    fn parse_pending_ads() {
        let cli = Cli::parse_from(["classifieds-admin", "ads", "list", "--pending"]);
        assert!(matches!(
            cli.command,
            Command::Ads(AdsCommand::List { pending: true })
        ));
    }
}
