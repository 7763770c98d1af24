//! Generate and validate the Dockerfile
//!
//! The Dockerfile pins the `uv` version from the test requirements and gives
//! the s6 supervisor enough grace time for every shutdown stage of the core.

use ha_core::shutdown;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{HassfestError, HassfestResult};
use crate::model::{Config, GenerationCache, Plugin};
use crate::requirements::read_pinned_version;

/// Name of the generated file, relative to the repository root
pub const DOCKERFILE: &str = "Dockerfile";

/// Extra seconds granted on top of the shutdown stage timeouts
pub const SHUTDOWN_GRACE_SECONDS: u64 = 10;

const UV_PACKAGE: &str = "uv";

const DOCKERFILE_TEMPLATE: &str = r##"# Automatically generated by hassfest.
#
# To update, run python3 -m script.hassfest -p docker
ARG BUILD_FROM
FROM ${BUILD_FROM}

# Synchronize with homeassistant/core.py:async_stop
ENV \
    S6_SERVICES_GRACETIME={timeout} \
    UV_SYSTEM_PYTHON=true

ARG QEMU_CPU

# Install uv
RUN pip3 install uv=={uv_version}

WORKDIR /usr/src

## Setup Home Assistant Core dependencies
COPY requirements.txt homeassistant/
COPY homeassistant/package_constraints.txt homeassistant/homeassistant/
RUN \
    uv pip install \
        --no-build \
        -r homeassistant/requirements.txt

COPY requirements_all.txt home_assistant_frontend-* home_assistant_intents-* homeassistant/
RUN \
    if ls homeassistant/home_assistant_*.whl 1> /dev/null 2>&1; then \
        uv pip install homeassistant/home_assistant_*.whl; \
    fi \
    && if [ "${BUILD_ARCH}" = "i386" ]; then \
        LD_PRELOAD="/usr/local/lib/libjemalloc.so.2" \
        MALLOC_CONF="background_thread:true,metadata_thp:auto,dirty_decay_ms:20000,muzzy_decay_ms:20000" \
        linux32 uv pip install \
            --no-build \
            -r homeassistant/requirements_all.txt; \
    else \
        LD_PRELOAD="/usr/local/lib/libjemalloc.so.2" \
        MALLOC_CONF="background_thread:true,metadata_thp:auto,dirty_decay_ms:20000,muzzy_decay_ms:20000" \
        uv pip install \
            --no-build \
            -r homeassistant/requirements_all.txt; \
    fi

## Setup Home Assistant Core
COPY . homeassistant/
RUN \
    uv pip install \
        -e ./homeassistant \
    && python3 -m compileall -j 4 \
        homeassistant/homeassistant

# Home Assistant S6-Overlay
COPY rootfs /

WORKDIR /config
"##;

/// s6 grace time in milliseconds: every shutdown stage plus the grace margin
pub fn shutdown_timeout_ms() -> u64 {
    (shutdown::total_stage_timeout() + SHUTDOWN_GRACE_SECONDS) * 1000
}

/// Render the Dockerfile for a given uv version
pub fn render_dockerfile(uv_version: &str) -> String {
    DOCKERFILE_TEMPLATE
        .replace("{timeout}", &shutdown_timeout_ms().to_string())
        .replace("{uv_version}", uv_version)
}

/// Render the Dockerfile using the uv pin from a requirements file
pub fn generate_dockerfile(requirements_path: &Path) -> HassfestResult<String> {
    let uv_version = read_pinned_version(requirements_path, UV_PACKAGE)?;
    Ok(render_dockerfile(&uv_version))
}

/// hassfest plugin keeping the Dockerfile in sync
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerPlugin;

impl Plugin for DockerPlugin {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn validate(&self, config: &mut Config, cache: &mut GenerationCache) -> HassfestResult<()> {
        let content = generate_dockerfile(&config.requirements_path())?;
        cache.set_dockerfile(content.clone());

        let path = config.path(DOCKERFILE);
        let on_disk = match std::fs::read_to_string(&path) {
            Ok(on_disk) => Some(on_disk),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(source) => return Err(HassfestError::ReadFile { path, source }),
        };

        if on_disk.as_deref() != Some(content.as_str()) {
            warn!("{} is not up to date", path.display());
            config.add_error(
                self.name(),
                "File Dockerfile is not up to date. Run python3 -m script.hassfest",
                true,
            );
        } else {
            debug!("{} is up to date", path.display());
        }
        Ok(())
    }

    fn generate(&self, config: &Config, cache: &GenerationCache) -> HassfestResult<()> {
        let content = cache.dockerfile()?;
        let path = config.path(DOCKERFILE);
        std::fs::write(&path, content)
            .map_err(|source| HassfestError::WriteFile { path: path.clone(), source })?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}
