//! Go import classification (SPEC_FULL §4.1 "Go").

use std::collections::HashSet;

use super::Classification;
use crate::model::ModuleDescriptor;

/// Go standard library package paths. Not exhaustive of every stdlib path (Go's
/// stdlib has sub-packages like `encoding/json`), but covers the common
/// single-segment and well-known multi-segment roots; anything else under these
/// roots is matched by prefix below.
const GO_SYSTEM_ROOTS: &[&str] = &[
    "fmt", "os", "io", "net", "net/http", "net/url", "strings", "strconv", "sync",
    "sync/atomic", "time", "context", "errors", "bytes", "bufio", "encoding",
    "encoding/json", "encoding/base64", "encoding/hex", "path", "path/filepath",
    "regexp", "sort", "math", "math/rand", "crypto", "crypto/sha256", "crypto/md5",
    "reflect", "runtime", "testing", "flag", "log", "unicode", "unsafe", "container",
    "container/list", "container/heap",
];

pub struct GoSystemSet {
    roots: HashSet<&'static str>,
}

impl GoSystemSet {
    pub fn new() -> Self {
        Self { roots: GO_SYSTEM_ROOTS.iter().copied().collect() }
    }

    pub fn classify(&self, name: &str, modules: &ModuleDescriptor) -> Classification {
        if self.roots.contains(name) {
            return Classification::System;
        }
        // A stdlib path one level deeper than a known root, e.g. "encoding/json/v2".
        if let Some((root, _)) = name.split_once('/') {
            if self.roots.contains(root) && !modules.go_modules.iter().any(|m| m == root) {
                return Classification::System;
            }
        }

        for module in modules.go_modules_longest_first() {
            if name == module || name.starts_with(&format!("{module}/")) {
                return Classification::Project;
            }
        }

        if name.starts_with("./") || name.starts_with("../") {
            return Classification::Project;
        }

        Classification::Unknown
    }
}
