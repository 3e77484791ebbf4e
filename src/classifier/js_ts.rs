//! JavaScript/TypeScript import classification (SPEC_FULL §4.1 "JavaScript/TypeScript").

use std::collections::HashSet;

use super::Classification;
use crate::model::ModuleDescriptor;

const JS_CORE_MODULES: &[&str] = &[
    "assert", "buffer", "child_process", "cluster", "crypto", "dgram", "dns",
    "domain", "events", "fs", "http", "http2", "https", "net", "os", "path",
    "perf_hooks", "process", "punycode", "querystring", "readline", "repl",
    "stream", "string_decoder", "timers", "tls", "tty", "url", "util", "v8", "vm",
    "worker_threads", "zlib", "console", "module",
];

const TS_SYSTEM_MODULES: &[&str] = &["typescript", "@types/node", "tslib"];

pub struct JsSystemSet {
    core: HashSet<&'static str>,
}

impl JsSystemSet {
    pub fn new() -> Self {
        Self { core: JS_CORE_MODULES.iter().copied().collect() }
    }

    pub fn classify(&self, name: &str, modules: &ModuleDescriptor) -> Classification {
        let bare = name.strip_prefix("node:").unwrap_or(name);
        if self.core.contains(bare) {
            return Classification::System;
        }

        if name.starts_with("./") || name.starts_with("../") {
            return Classification::Project;
        }

        for pkg in &modules.js_packages {
            if name == pkg.as_str() || name.starts_with(&format!("{pkg}/")) {
                return Classification::Project;
            }
        }

        Classification::Unknown
    }
}

pub struct TsSystemSet {
    modules: HashSet<&'static str>,
}

impl TsSystemSet {
    pub fn new() -> Self {
        Self { modules: TS_SYSTEM_MODULES.iter().copied().collect() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains(name)
    }
}
