//! Numeric uid/gid to name resolution.
use std::collections::HashMap;
use std::ffi::CStr;

const INITIAL_BUF: usize = 1024;
const MAX_BUF: usize = 1 << 20;

pub trait IdResolver {
    fn user_name(&mut self, uid: u32) -> Option<String>;
    fn group_name(&mut self, gid: u32) -> Option<String>;

    /// User name, or the numeric uid when the account database has no entry.
    fn owner_or_id(&mut self, uid: u32) -> String {
        self.user_name(uid).unwrap_or_else(|| uid.to_string())
    }

    /// Group name, or the numeric gid when the group database has no entry.
    fn group_or_id(&mut self, gid: u32) -> String {
        self.group_name(gid).unwrap_or_else(|| gid.to_string())
    }
}

/// Resolver backed by the system account and group databases, memoized per scan.
#[derive(Debug, Default)]
pub struct SystemIds {
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl SystemIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdResolver for SystemIds {
    fn user_name(&mut self, uid: u32) -> Option<String> {
        self.users.entry(uid).or_insert_with(|| lookup_user(uid)).clone()
    }

    fn group_name(&mut self, gid: u32) -> Option<String> {
        self.groups.entry(gid).or_insert_with(|| lookup_group(gid)).clone()
    }
}

fn lookup_user(uid: u32) -> Option<String> {
    let mut buf = vec![0 as libc::c_char; INITIAL_BUF];
    loop {
        // SAFETY: `pwd` and `result` are valid out-pointers and `buf` outlives the call;
        // `pw_name` points into `buf` and is read before `buf` is touched again.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwuid_r(
                uid as libc::uid_t,
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE && buf.len() < MAX_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

fn lookup_group(gid: u32) -> Option<String> {
    let mut buf = vec![0 as libc::c_char; INITIAL_BUF];
    loop {
        // SAFETY: as in `lookup_user`, with `gr_name` pointing into `buf`.
        let mut grp: libc::group = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::group = std::ptr::null_mut();
        let rc = unsafe {
            libc::getgrgid_r(
                gid as libc::gid_t,
                &mut grp,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc == libc::ERANGE && buf.len() < MAX_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || grp.gr_name.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoAccounts;

    impl IdResolver for NoAccounts {
        fn user_name(&mut self, _uid: u32) -> Option<String> {
            None
        }

        fn group_name(&mut self, _gid: u32) -> Option<String> {
            None
        }
    }

    #[test]
    fn unresolvable_ids_fall_back_to_numbers() {
        let mut ids = NoAccounts;
        assert_eq!(ids.owner_or_id(4242), "4242");
        assert_eq!(ids.group_or_id(31337), "31337");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn resolves_root_account() {
        let mut ids = SystemIds::new();
        assert_eq!(ids.user_name(0).as_deref(), Some("root"));
        assert_eq!(ids.group_name(0).as_deref(), Some("root"));
    }

    #[test]
    fn lookups_are_memoized() {
        let mut ids = SystemIds::new();
        let first = ids.user_name(u32::MAX - 1);
        let second = ids.user_name(u32::MAX - 1);
        assert_eq!(first, second);
        assert_eq!(ids.users.len(), 1);
    }
}
