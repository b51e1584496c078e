//! On-disk layout of applications, sandboxes and WildFly servers.
//!
//! Pure path arithmetic. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

/// Directory under the droplet root that holds every component sandbox.
pub const BUILDPACK_DIR: &str = ".java-buildpack";

/// Marker that selects Galleon provisioning.
pub const PROVISIONING_MANIFEST: &str = "WEB-INF/provisioning.xml";

/// Marker that selects a custom WildFly archive.
pub const CUSTOM_DESCRIPTOR: &str = "wildfly-custom.yml";

/// Directory of pre-built deployments shipped by custom-archive applications.
pub const APP_DEPLOYMENTS_DIR: &str = "deployments";

/// JAR manifest consulted for a `Main-Class`.
pub const JAR_MANIFEST: &str = "META-INF/MANIFEST.MF";

/// Galleon launcher inside an installed Galleon distribution.
pub const GALLEON_SCRIPT: &str = "bin/galleon.sh";

/// Directory Galleon provisions the server into, relative to the sandbox.
pub const GALLEON_SERVER_DIR: &str = "wildfly";

/// Sandbox of the JRE component that runs before the WildFly containers.
pub const DEFAULT_JRE_COMPONENT: &str = "open_jdk_jre";

/// Scripts the launch environment sources before running the start command.
pub const PROFILE_D_DIR: &str = ".profile.d";

const JAVA_OPTS_PROFILE: &str = "java_opts.sh";
const LAUNCH_SCRIPT: &str = "bin/standalone.sh";
const DEPLOYMENTS_DIR: &str = "standalone/deployments";
const DEPLOYMENT_UNIT: &str = "ROOT.war";
const DODEPLOY_MARKER: &str = "ROOT.war.dodeploy";
const WEB_INF_LIB: &str = "WEB-INF/lib";

/// Sandbox directory of the named component inside a droplet.
#[must_use]
pub fn sandbox_dir(droplet_root: &Path, component: &str) -> PathBuf {
    droplet_root.join(BUILDPACK_DIR).join(component)
}

/// `.profile.d/java_opts.sh` inside a droplet.
#[must_use]
pub fn java_opts_profile(droplet_root: &Path) -> PathBuf {
    droplet_root.join(PROFILE_D_DIR).join(JAVA_OPTS_PROFILE)
}

/// Well-known paths of a WildFly server installed at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
    root: PathBuf,
}

impl ServerLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `bin/standalone.sh`.
    #[must_use]
    pub fn launch_script(&self) -> PathBuf {
        self.root.join(LAUNCH_SCRIPT)
    }

    /// Directory watched by the server's deployment scanner.
    #[must_use]
    pub fn deployments_dir(&self) -> PathBuf {
        self.root.join(DEPLOYMENTS_DIR)
    }

    /// Exploded `ROOT.war` directory.
    #[must_use]
    pub fn deployment_unit(&self) -> PathBuf {
        self.deployments_dir().join(DEPLOYMENT_UNIT)
    }

    /// `ROOT.war.dodeploy`, the sibling of the deployment unit.
    #[must_use]
    pub fn dodeploy_marker(&self) -> PathBuf {
        self.deployments_dir().join(DODEPLOY_MARKER)
    }

    #[must_use]
    pub fn web_inf_lib(&self) -> PathBuf {
        self.deployment_unit().join(WEB_INF_LIB)
    }
}
