//! Directory layout and per-directory fields of the generated plugin API
//!
//! Every configuration container and list becomes a directory under
//! `<source-dir>/plugin/api`. The leaves declared directly in a directory,
//! together with its lists, make up the fields its `check`/`load`/`store`
//! sources deal with. Notifications are collected separately with their own
//! naming prefix, rooted at the module prefix.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use itertools::Itertools;
use schema_tree::{NodeKind, SchemaNode};

use super::{flatten, walk, DepthStack, WalkPolicy};
use crate::constants::defaults;
use crate::helpers::to_c_variable;
use crate::type_map::{TypeMap, STORAGE_TYPES};

const PREFIX_SEPARATOR: char = '_';
const NOTIF_PREFIX_SEPARATOR: char = '/';

const API_FILES: [&str; 3] = ["check", "load", "store"];
const NOTIF_FILES: [&str; 1] = ["notif"];
const EXTENSIONS: [&str; 2] = ["c", "h"];

/// Context inherited from the enclosing directory
#[derive(Clone, Debug)]
struct Scope {
    path: PathBuf,
    prefix: String,
    notif_prefix: String,
}

impl Scope {
    fn child(&self, name: &str) -> Self {
        let fragment = to_c_variable(name);
        Scope {
            path: self.path.join(&fragment),
            prefix: format!("{}{fragment}{PREFIX_SEPARATOR}", self.prefix),
            notif_prefix: format!("{}{fragment}{PREFIX_SEPARATOR}", self.notif_prefix),
        }
    }
}

/// Drop the trailing separator an accumulated prefix always ends with
fn trim_separator(prefix: &str) -> String {
    let mut chars = prefix.chars();
    chars.next_back();
    chars.as_str().to_string()
}

#[derive(Debug)]
pub struct FieldGroup<'a, N> {
    prefix: String,
    fields: Vec<&'a N>,
}

impl<'a, N> FieldGroup<'a, N> {
    fn new(prefix: &str) -> Self {
        FieldGroup {
            prefix: trim_separator(prefix),
            fields: Vec::new(),
        }
    }

    /// Identifier prefix of the directory, e.g. `system_clock`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Leaves, leaf-lists and lists declared directly in the directory
    pub fn fields(&self) -> &[&'a N] {
        &self.fields
    }
}

#[derive(Debug)]
pub struct Notification<'a, N> {
    node: &'a N,
    fields: Vec<&'a N>,
}

impl<'a, N> Notification<'a, N> {
    pub fn node(&self) -> &'a N {
        self.node
    }

    /// Leaves carried by the notification, nested levels flattened
    pub fn fields(&self) -> &[&'a N] {
        &self.fields
    }
}

#[derive(Debug)]
pub struct NotificationGroup<'a, N> {
    prefix: String,
    notifications: Vec<Notification<'a, N>>,
}

impl<'a, N> NotificationGroup<'a, N> {
    fn new(prefix: &str) -> Self {
        NotificationGroup {
            prefix: trim_separator(prefix),
            notifications: Vec::new(),
        }
    }

    /// Notification prefix, e.g. `system/system`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn notifications(&self) -> &[Notification<'a, N>] {
        &self.notifications
    }

    /// Fields of all notifications in the group, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &'a N> + '_ {
        self.notifications
            .iter()
            .flat_map(|notification| notification.fields.iter().copied())
    }
}

/// Single-pass builder of an `ApiSurface`
pub struct ApiWalker<'a, N> {
    scopes: DepthStack<Scope>,
    api_dir: PathBuf,
    directories: Vec<PathBuf>,
    field_groups: IndexMap<PathBuf, FieldGroup<'a, N>>,
    notifications: IndexMap<PathBuf, NotificationGroup<'a, N>>,
}

impl<'a, N: SchemaNode> ApiWalker<'a, N> {
    /// `prefix` roots the notification prefixes; directories are rooted at
    /// `<source_dir>/plugin/api`.
    pub fn new(prefix: &str, source_dir: impl AsRef<Path>) -> Self {
        let api_dir = defaults::API_SUBDIR
            .iter()
            .fold(source_dir.as_ref().to_path_buf(), |dir, part| dir.join(part));

        ApiWalker {
            scopes: DepthStack::new(Scope {
                path: api_dir.clone(),
                prefix: String::new(),
                notif_prefix: format!("{prefix}{NOTIF_PREFIX_SEPARATOR}"),
            }),
            api_dir,
            directories: Vec::new(),
            field_groups: IndexMap::new(),
            notifications: IndexMap::new(),
        }
    }

    pub fn run(mut self, roots: &'a [N]) -> ApiSurface<'a, N> {
        walk(roots, &mut self);

        log::debug!(
            "API walk found {} directories, {} field groups, {} notification groups",
            self.directories.len(),
            self.field_groups.len(),
            self.notifications.len()
        );

        ApiSurface {
            api_dir: self.api_dir,
            directories: self.directories,
            field_groups: self.field_groups,
            notifications: self.notifications,
        }
    }
}

impl<'a, N: SchemaNode> WalkPolicy<'a, N> for ApiWalker<'a, N> {
    fn accept(&self, node: &N) -> bool {
        !node.is_config_false() && node.kind() != NodeKind::Rpc
    }

    fn visit(&mut self, node: &'a N, depth: usize) -> bool {
        self.scopes.enter(depth);
        let scope = self.scopes.current();

        match node.kind() {
            NodeKind::Container | NodeKind::List => {
                let group = self
                    .field_groups
                    .entry(scope.path.clone())
                    .or_insert_with(|| FieldGroup::new(&scope.prefix));
                if node.kind() == NodeKind::List {
                    // list entries are enumerated by the parent directory
                    group.fields.push(node);
                }

                let child = scope.child(node.name());
                self.directories.push(child.path.clone());
                self.scopes.open(depth, child);
                false
            }
            NodeKind::Leaf | NodeKind::LeafList => {
                self.field_groups
                    .entry(scope.path.clone())
                    .or_insert_with(|| FieldGroup::new(&scope.prefix))
                    .fields
                    .push(node);
                true
            }
            NodeKind::Notification => {
                let notification = Notification {
                    node,
                    fields: flatten(node.children()),
                };
                self.notifications
                    .entry(scope.path.clone())
                    .or_insert_with(|| NotificationGroup::new(&scope.notif_prefix))
                    .notifications
                    .push(notification);
                true
            }
            NodeKind::Rpc | NodeKind::Other => false,
        }
    }
}

/// Everything the emission stage needs to lay out the plugin API
#[derive(Debug)]
pub struct ApiSurface<'a, N> {
    api_dir: PathBuf,
    directories: Vec<PathBuf>,
    field_groups: IndexMap<PathBuf, FieldGroup<'a, N>>,
    notifications: IndexMap<PathBuf, NotificationGroup<'a, N>>,
}

impl<'a, N> ApiSurface<'a, N> {
    /// One directory per container and list, parents first
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// `directories()` followed by the directory holding notification sources
    pub fn notif_directories(&self) -> Vec<&Path> {
        self.directories
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.api_dir.as_path()))
            .collect()
    }

    pub fn field_groups(&self) -> &IndexMap<PathBuf, FieldGroup<'a, N>> {
        &self.field_groups
    }

    pub fn notifications(&self) -> &IndexMap<PathBuf, NotificationGroup<'a, N>> {
        &self.notifications
    }

    pub fn types(&self) -> &'static TypeMap {
        &STORAGE_TYPES
    }

    pub fn api_filenames(&self) -> Vec<String> {
        filenames(&API_FILES, &EXTENSIONS)
    }

    pub fn notif_filenames(&self) -> Vec<String> {
        filenames(&NOTIF_FILES, &EXTENSIONS)
    }
}

/// Walk `roots` and collect the plugin API surface
pub fn api_surface<'a, N: SchemaNode>(
    prefix: &str,
    source_dir: impl AsRef<Path>,
    roots: &'a [N],
) -> ApiSurface<'a, N> {
    ApiWalker::new(prefix, source_dir).run(roots)
}

/// Every `<base>.<extension>` combination
pub fn filenames(bases: &[&str], extensions: &[&str]) -> Vec<String> {
    bases
        .iter()
        .cartesian_product(extensions)
        .map(|(base, ext)| format!("{base}.{ext}"))
        .collect()
}
