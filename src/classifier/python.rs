//! Python import classification (SPEC_FULL §4.1 "Python").
//!
//! Stdlib module set grounded on `other_examples/5e92ba67_..._categorizer.rs.rs`'s
//! `python_stdlib_modules`.

use std::collections::HashSet;

use super::Classification;
use crate::model::ModuleDescriptor;

const PYTHON_STDLIB: &[&str] = &[
    "abc", "argparse", "array", "ast", "asyncio", "base64", "bisect", "builtins",
    "bz2", "calendar", "cgi", "cmath", "cmd", "code", "codecs", "collections",
    "colorsys", "concurrent", "configparser", "contextlib", "contextvars", "copy",
    "copyreg", "csv", "ctypes", "dataclasses", "datetime", "dbm", "decimal",
    "difflib", "dis", "doctest", "email", "encodings", "enum", "errno",
    "faulthandler", "fcntl", "filecmp", "fileinput", "fnmatch", "fractions",
    "ftplib", "functools", "gc", "getopt", "getpass", "gettext", "glob",
    "graphlib", "grp", "gzip", "hashlib", "heapq", "hmac", "html", "http",
    "imaplib", "importlib", "inspect", "io", "ipaddress", "itertools", "json",
    "keyword", "linecache", "locale", "logging", "lzma", "mailbox", "marshal",
    "math", "mimetypes", "mmap", "multiprocessing", "netrc", "numbers", "operator",
    "os", "pathlib", "pdb", "pickle", "pickletools", "pkgutil", "platform",
    "plistlib", "poplib", "pprint", "profile", "pstats", "pty", "pwd", "py_compile",
    "pyclbr", "pydoc", "queue", "quopri", "random", "re", "readline", "reprlib",
    "resource", "rlcompleter", "sched", "secrets", "select", "selectors", "shelve",
    "shlex", "shutil", "signal", "site", "smtplib", "socket", "socketserver",
    "sqlite3", "ssl", "stat", "statistics", "string", "stringprep", "struct",
    "subprocess", "sys", "sysconfig", "syslog", "tarfile", "tempfile", "termios",
    "textwrap", "threading", "time", "timeit", "tkinter", "token", "tokenize",
    "tomllib", "trace", "traceback", "tracemalloc", "types", "typing", "unicodedata",
    "unittest", "urllib", "uuid", "venv", "warnings", "wave", "weakref",
    "webbrowser", "xml", "xmlrpc", "zipapp", "zipfile", "zipimport", "zlib",
    "zoneinfo",
];

pub struct PythonStdlib {
    roots: HashSet<&'static str>,
}

impl PythonStdlib {
    pub fn new() -> Self {
        Self { roots: PYTHON_STDLIB.iter().copied().collect() }
    }

    pub fn classify(&self, name: &str, modules: &ModuleDescriptor) -> Classification {
        if name.starts_with('.') {
            return Classification::Project;
        }

        let root = name.split('.').next().unwrap_or(name);
        if self.roots.contains(root) {
            return Classification::System;
        }

        for pkg in &modules.python_packages {
            if root == pkg.as_str() || name.starts_with(&format!("{pkg}.")) {
                return Classification::Project;
            }
        }

        Classification::Unknown
    }
}
