//! Application context, built once at startup and handed to the view.

use log::{debug, info};

use crate::{
    config::Config,
    error::{Error, Result},
    icons::{IconLibrary, IconPack},
    router::Router,
    store::AlarmStore,
};

/// registry for the stores of the app
///
/// stores are only created the first time something asks for them
#[derive(Debug, Default)]
pub struct Stores {
    alarm: Option<AlarmStore>,
}

impl Stores {
    pub fn alarm(&mut self) -> &mut AlarmStore {
        self.alarm.get_or_insert_with(|| {
            debug!("creating the {} store", AlarmStore::ID);
            AlarmStore::new()
        })
    }

    #[must_use]
    pub const fn alarm_created(&self) -> bool {
        self.alarm.is_some()
    }
}

#[derive(Debug)]
pub struct AppBuilder {
    config: Config,
    icon_library: IconLibrary,
    stores: Option<Stores>,
    router: Option<Router>,
}

impl AppBuilder {
    #[must_use]
    pub fn register_icon_pack(mut self, pack: IconPack) -> Self {
        info!("registering icon pack {pack:?}");
        self.icon_library.add(pack);
        self
    }

    #[must_use]
    pub fn use_store(mut self) -> Self {
        info!("installing store module");
        self.stores = Some(Stores::default());
        self
    }

    #[must_use]
    pub fn use_router(mut self) -> Self {
        info!("installing router with {} route(s)", self.config.routes.len());
        self.router = Some(Router::new(self.config.routes.clone()));
        self
    }

    /// mounts the root view at the configured target
    pub fn mount(self) -> Result<App> {
        let mut app = App {
            config: self.config,
            icon_library: self.icon_library,
            stores: self.stores,
            router: self.router,
            mounted: None,
        };
        app.mount()?;
        Ok(app)
    }
}

#[derive(Debug)]
pub struct App {
    config: Config,
    icon_library: IconLibrary,
    stores: Option<Stores>,
    router: Option<Router>,
    mounted: Option<String>,
}

impl App {
    #[must_use]
    pub fn builder(config: Config) -> AppBuilder {
        info!(
            "creating app (theme {:?}, default icon set {})",
            config.theme, config.icons.default_set
        );
        AppBuilder {
            config,
            icon_library: IconLibrary::new(),
            stores: None,
            router: None,
        }
    }

    pub fn mount(&mut self) -> Result<()> {
        if let Some(target) = &self.mounted {
            return Err(Error::AlreadyMounted(target.clone()));
        }
        info!("mounting root view at {}", self.config.mount_target);
        self.mounted = Some(self.config.mount_target.clone());
        Ok(())
    }

    #[must_use]
    pub fn mounted_at(&self) -> Option<&str> {
        self.mounted.as_deref()
    }

    /// the alarm store, created on first access
    pub fn alarm_store(&mut self) -> Result<&mut AlarmStore> {
        self.stores
            .as_mut()
            .map(Stores::alarm)
            .ok_or(Error::StoreNotInstalled)
    }

    #[must_use]
    pub const fn stores(&self) -> Option<&Stores> {
        self.stores.as_ref()
    }

    #[must_use]
    pub const fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    pub fn router_mut(&mut self) -> Option<&mut Router> {
        self.router.as_mut()
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    #[must_use]
    pub const fn icon_library(&self) -> &IconLibrary {
        &self.icon_library
    }

    /// looks up a glyph in the configured icon sets
    #[must_use]
    pub fn icon(&self, alias: &str) -> &'static str {
        self.config.icons.glyph(alias).unwrap_or("?")
    }
}

/// runs the whole startup sequence: icons, store, router, mount
pub fn bootstrap(config: Config) -> Result<App> {
    App::builder(config)
        .register_icon_pack(IconPack::Solid)
        .register_icon_pack(IconPack::Regular)
        .use_store()
        .use_router()
        .mount()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_installs_everything() {
        let app = bootstrap(Config::default()).unwrap();
        assert_eq!(app.mounted_at(), Some("#app"));
        assert_eq!(
            app.icon_library().packs(),
            [IconPack::Solid, IconPack::Regular]
        );
        assert!(app.stores().is_some());
        assert_eq!(app.router().map(|r| r.current().path.as_str()), Some("/"));
    }

    #[test]
    fn store_is_created_lazily_and_once() {
        let mut app = bootstrap(Config::default()).unwrap();
        assert!(!app.stores().unwrap().alarm_created());

        app.alarm_store().unwrap().create_alarm("07:00");
        assert!(app.stores().unwrap().alarm_created());

        let store = app.alarm_store().unwrap();
        store.create_alarm("22:15");
        assert_eq!(store.alarms(), ["07:00", "22:15"]);
    }

    #[test]
    fn store_needs_store_module() {
        let mut app = App::builder(Config::default()).mount().unwrap();
        assert!(matches!(app.alarm_store(), Err(Error::StoreNotInstalled)));
        assert!(app.router().is_none());
    }

    #[test]
    fn mounting_twice_fails() {
        let mut app = bootstrap(Config {
            mount_target: "#clock".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert!(matches!(app.mount(), Err(Error::AlreadyMounted(target)) if target == "#clock"));
    }

    #[test]
    fn icons_resolve_through_config() {
        let app = bootstrap(Config::default()).unwrap();
        assert_eq!(app.icon("moon"), "🌙");
        assert_eq!(app.icon("nope"), "?");
    }
}
