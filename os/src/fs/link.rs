#[cfg(feature = "pseudofs-softlinks")]
use crate::config::SYMLOOP_MAX;
use crate::error::{Errno, Result};

/// Bookkeeping for one path lookup.
///
/// With `pseudofs-softlinks` it counts the symbolic links followed so
/// that cyclic links end in `ELOOP`. Callers of `stat()` never see it.
#[derive(Debug, Default)]
pub struct LinkWalk {
    #[cfg(feature = "pseudofs-softlinks")]
    count: u8,
}

impl LinkWalk {
    pub const fn new() -> Self {
        Self {
            #[cfg(feature = "pseudofs-softlinks")]
            count: 0,
        }
    }

    /// Records one hop. Fails once more than `SYMLOOP_MAX` links were
    /// followed in this lookup.
    #[cfg(feature = "pseudofs-softlinks")]
    pub fn follow(&mut self) -> Result<()> {
        if self.count as usize >= SYMLOOP_MAX {
            return_errno_with_message!(Errno::ELOOP, "too many levels of symbolic links");
        }
        self.count += 1;
        Ok(())
    }

    #[cfg(not(feature = "pseudofs-softlinks"))]
    pub fn follow(&mut self) -> Result<()> {
        return_errno_with_message!(Errno::ENOSYS, "symbolic links are not configured");
    }

    #[cfg(feature = "pseudofs-softlinks")]
    pub fn hops(&self) -> usize {
        self.count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "pseudofs-softlinks")]
    #[test]
    fn budget_allows_symloop_max_hops() {
        let mut walk = LinkWalk::new();
        for _ in 0..SYMLOOP_MAX {
            walk.follow().unwrap();
        }
        assert_eq!(walk.hops(), SYMLOOP_MAX);
        assert_eq!(walk.follow().unwrap_err().error(), Errno::ELOOP);
        assert_eq!(walk.hops(), SYMLOOP_MAX);
    }

    #[cfg(not(feature = "pseudofs-softlinks"))]
    #[test]
    fn links_unsupported_without_feature() {
        let mut walk = LinkWalk::new();
        assert_eq!(walk.follow().unwrap_err().error(), Errno::ENOSYS);
    }
}
