use crate::config::{NAME_MAX, PATH_MAX};
use crate::error::{Errno, Result};
use alloc::string::String;
use alloc::vec::Vec;

/// Turns `path` into an absolute path without `.`, `..` or empty
/// components. Relative paths start from `cwd`, which must itself be
/// absolute. `..` at the root stays at the root.
///
/// This is purely textual: `..` drops the previous name without looking
/// it up, so `/file/..` is `/` and `/link/..` is the link's own parent.
pub fn normalize(cwd: &str, path: &str) -> Result<String> {
    if path.is_empty() {
        return_errno_with_message!(Errno::ENOENT, "path is empty");
    }
    if path.len() > PATH_MAX {
        return_errno_with_message!(Errno::ENAMETOOLONG, "path is too long");
    }

    let base = if path.starts_with('/') { "" } else { cwd };
    let mut names: Vec<&str> = Vec::new();
    for name in base.split('/').chain(path.split('/')) {
        match name {
            "" | "." => {}
            ".." => {
                names.pop();
            }
            name => {
                if name.len() > NAME_MAX {
                    return_errno_with_message!(Errno::ENAMETOOLONG, "file name is too long");
                }
                names.push(name);
            }
        }
    }

    let mut abs = String::from("/");
    abs.push_str(&names.join("/"));
    if abs.len() > PATH_MAX {
        return_errno_with_message!(Errno::ENAMETOOLONG, "path is too long");
    }
    Ok(abs)
}

/// Splits a normalized path into its parent directory and last name.
/// The root has neither and gives `None`.
pub fn split_last(path: &str) -> Option<(&str, &str)> {
    let idx = path.rfind('/')?;
    let name = &path[idx + 1..];
    if name.is_empty() {
        return None;
    }
    let parent = if idx == 0 { "/" } else { &path[..idx] };
    Some((parent, name))
}
