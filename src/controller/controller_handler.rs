use std::sync::Arc;

use clap::Subcommand;
use log::{debug, info};

use crate::configuration::config::Config;
use crate::design_history::clock::{Clock, SystemClock};
use crate::design_history::history_manager::DesignHistoryManager;
use crate::design_history::types::NewDesign;
use crate::error_handling::types::*;
use crate::gallery::export::FileExporter;
use crate::gallery::view::{format_timestamp, GalleryView};
use crate::session_management::session_manager::SessionManager;
use crate::storage::file_storage::FileStorage;
use crate::storage::record_store::RecordStore;
use crate::storage::storage_trait::Storage;
use crate::validation::{validate_login, DEMO_EMAIL, DEMO_NAME};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Log in with an email address and a display name
    Login { email: String, name: String },
    /// Log in with the demo account
    Demo,
    /// Forget the logged-in user
    Logout,
    /// Show who is logged in
    Whoami,
    /// Manage saved designs (requires login)
    #[command(subcommand)]
    History(HistoryCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum HistoryCommand {
    /// List saved designs, newest first
    List,
    /// Show one design in detail
    Show { id: String },
    /// Save a generated design
    Add {
        #[arg(long)]
        theme: String,
        #[arg(long)]
        room: String,
        #[arg(long)]
        name: String,
        /// Image reference: data URI, local path or URL
        #[arg(long)]
        image: String,
    },
    /// Delete a design
    Remove { id: String },
    /// Delete every design
    Clear {
        #[arg(long, action = clap::ArgAction::SetTrue)]
        yes: bool,
    },
    /// Save a design's image into the export directory
    Export { id: String },
}

/// Composition root: owns both managers for the life of the process and
/// dispatches commands to them.
pub struct Controller {
    pub config: Config,
    session: SessionManager,
    history: DesignHistoryManager,
    exporter: FileExporter,
    clock: Arc<dyn Clock>,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        config.validate()?;
        let backend = FileStorage::new(&config.storage_path)?;
        Ok(Self::with_storage(config, Arc::new(backend)))
    }

    pub fn with_storage(config: Config, backend: Arc<dyn Storage>) -> Self {
        let store = RecordStore::new(backend);
        let session = SessionManager::open(store.clone());
        let history = DesignHistoryManager::open(store);
        let exporter = FileExporter::new(&config.export_dir);
        info!("Controller ready, storage at {}", config.storage_path.display());
        Self {
            config,
            session,
            history,
            exporter,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn history(&self) -> &DesignHistoryManager {
        &self.history
    }

    /// Runs one command and returns the lines to show the user.
    pub fn run(&mut self, command: Command) -> Result<Vec<String>, ControllerError> {
        debug!("Running {:?}", command);
        match command {
            Command::Login { email, name } => self.login(&email, &name),
            Command::Demo => self.login(DEMO_EMAIL, DEMO_NAME),
            Command::Logout => {
                self.session.logout();
                Ok(vec![String::from("Logged out")])
            }
            Command::Whoami => Ok(vec![match self.session.current_user() {
                Some(user) => format!("{} <{}>", user.name, user.email),
                None => String::from("Not logged in"),
            }]),
            Command::History(cmd) => {
                self.session.require_authenticated()?;
                self.run_history(cmd)
            }
        }
    }

    fn login(&mut self, email: &str, name: &str) -> Result<Vec<String>, ControllerError> {
        validate_login(email, name)?;
        let user = self.session.login(email, name);
        Ok(vec![format!("Logged in as {} <{}>", user.name, user.email)])
    }

    fn run_history(&mut self, command: HistoryCommand) -> Result<Vec<String>, ControllerError> {
        let now = self.clock.now_millis();
        let mut gallery = GalleryView::new(&mut self.history);
        match command {
            HistoryCommand::List => {
                let mut lines = vec![gallery.summary()];
                lines.extend(gallery.entries().iter().map(GalleryView::describe));
                Ok(lines)
            }
            HistoryCommand::Show { id } => {
                if !gallery.select(&id) {
                    return Err(ControllerError::DesignNotFound(id));
                }
                let record = gallery
                    .selected()
                    .ok_or_else(|| ControllerError::DesignNotFound(id.clone()))?;
                Ok(vec![
                    format!("id:      {}", record.id),
                    format!("name:    {}", record.name),
                    format!("theme:   {}", record.theme),
                    format!("room:    {}", record.room),
                    format!("created: {}", format_timestamp(record.timestamp)),
                    format!("image:   {}", record.image_url),
                ])
            }
            HistoryCommand::Add {
                theme,
                room,
                name,
                image,
            } => {
                let record = self.history.add(NewDesign::new(theme, room, name, image));
                Ok(vec![format!("Saved {} as {}", record.name, record.id)])
            }
            HistoryCommand::Remove { id } => {
                if gallery.remove(&id) {
                    Ok(vec![format!("Removed {}", id)])
                } else {
                    Ok(vec![format!("Nothing to remove for {}", id)])
                }
            }
            HistoryCommand::Clear { yes } => {
                if !yes {
                    return Err(ControllerError::ConfirmationRequired);
                }
                if gallery.clear_all(true) {
                    Ok(vec![String::from("Cleared all designs")])
                } else {
                    Ok(vec![String::from("Nothing to clear")])
                }
            }
            HistoryCommand::Export { id } => {
                let path = gallery.download(&id, &self.exporter, now)?;
                Ok(vec![format!("Exported to {}", path.display())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_storage::MemoryStorage;
    use tempfile::TempDir;

    fn controller(backend: Arc<MemoryStorage>, export_dir: &std::path::Path) -> Controller {
        let config = Config {
            export_dir: export_dir.to_path_buf(),
            ..Config::default()
        };
        Controller::with_storage(config, backend)
    }

    fn add(theme: &str, room: &str, name: &str) -> Command {
        Command::History(HistoryCommand::Add {
            theme: theme.into(),
            room: room.into(),
            name: name.into(),
            image: "data:image/png;base64,aGk=".into(),
        })
    }

    #[test]
    fn test_history_requires_login() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        let err = ctl.run(Command::History(HistoryCommand::List)).unwrap_err();
        assert!(matches!(
            err,
            ControllerError::AccessError(AccessError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_login_is_validated() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        let err = ctl
            .run(Command::Login {
                email: "not-an-email".into(),
                name: "Someone".into(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ControllerError::ValidationError(ValidationError::InvalidEmail)
        ));
        assert!(!ctl.session().is_authenticated());
    }

    #[test]
    fn test_login_stores_fields_as_given() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        ctl.run(Command::Login {
            email: "ana@studio.io".into(),
            name: "  Ana  ".into(),
        })
        .unwrap();
        let user = ctl.session().current_user().unwrap();
        assert_eq!(user.name, "  Ana  ");
        assert_eq!(user.email, "ana@studio.io");
    }

    #[test]
    fn test_full_flow_persists_across_controllers() {
        let dir = TempDir::new().unwrap();
        let backend = Arc::new(MemoryStorage::new());
        let mut ctl = controller(backend.clone(), dir.path());

        ctl.run(Command::Demo).unwrap();
        ctl.run(add("modern", "living room", "Modern Living Room")).unwrap();
        ctl.run(add("vintage", "bedroom", "Vintage Bedroom")).unwrap();

        let mut reopened = controller(backend, dir.path());
        assert_eq!(
            reopened.run(Command::Whoami).unwrap(),
            vec![format!("{} <{}>", DEMO_NAME, DEMO_EMAIL)]
        );
        let lines = reopened.run(Command::History(HistoryCommand::List)).unwrap();
        assert_eq!(lines[0], "2 designs saved");
        assert!(lines[1].contains("Vintage Bedroom"));
        assert!(lines[2].contains("Modern Living Room"));
    }

    #[test]
    fn test_clear_needs_yes() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        ctl.run(Command::Demo).unwrap();
        ctl.run(add("modern", "office", "Office")).unwrap();

        let err = ctl
            .run(Command::History(HistoryCommand::Clear { yes: false }))
            .unwrap_err();
        assert!(matches!(err, ControllerError::ConfirmationRequired));
        assert_eq!(ctl.history().len(), 1);

        ctl.run(Command::History(HistoryCommand::Clear { yes: true }))
            .unwrap();
        assert!(ctl.history().is_empty());
    }

    #[test]
    fn test_export_writes_image() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        ctl.run(Command::Demo).unwrap();
        ctl.run(add("modern", "office", "Office")).unwrap();
        let id = ctl.history().designs()[0].id.clone();

        let lines = ctl
            .run(Command::History(HistoryCommand::Export { id }))
            .unwrap();
        assert!(lines[0].starts_with("Exported to "));
        let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(exported.len(), 1);
    }

    #[test]
    fn test_show_unknown_design() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        ctl.run(Command::Demo).unwrap();
        let err = ctl
            .run(Command::History(HistoryCommand::Show {
                id: "design_nope".into(),
            }))
            .unwrap_err();
        assert!(matches!(err, ControllerError::DesignNotFound(_)));
    }

    #[test]
    fn test_logout_locks_history() {
        let dir = TempDir::new().unwrap();
        let mut ctl = controller(Arc::new(MemoryStorage::new()), dir.path());
        ctl.run(Command::Demo).unwrap();
        ctl.run(Command::Logout).unwrap();
        assert_eq!(ctl.run(Command::Whoami).unwrap(), vec!["Not logged in"]);
        assert!(ctl.run(Command::History(HistoryCommand::List)).is_err());
    }
}
