//! Property tests for the archive filesystem and action log.

use proptest::prelude::*;
use tarsh_kernel::vfs::path;
use tarsh_kernel::{ActionLog, ArchiveFs, Entry, VfsError};

fn entry_strategy() -> impl Strategy<Value = Entry> {
    ("[a-c]{1,2}(/[a-c]{1,2}){0,2}", any::<bool>()).prop_map(|(name, is_dir)| {
        if is_dir {
            Entry::directory(name)
        } else {
            Entry::file(name)
        }
    })
}

fn fs_strategy() -> impl Strategy<Value = ArchiveFs> {
    prop::collection::vec(entry_strategy(), 0..12).prop_map(|entries| ArchiveFs::from_entries(entries))
}

proptest! {
    #[test]
    fn root_listing_contains_every_directory(fs in fs_strategy()) {
        let listed: Vec<&str> = fs.list("/").iter().map(|e| e.path.as_str()).collect();
        for entry in fs.iter() {
            let expected = entry.is_dir() || entry.path.starts_with('/');
            prop_assert_eq!(listed.contains(&entry.path.as_str()), expected);
        }
    }

    #[test]
    fn cd_succeeds_iff_target_is_directory(
        fs in fs_strategy(),
        target in "[a-c]{1,2}(/[a-c]{1,2}){0,2}",
    ) {
        let resolved = path::resolve("/", &target);
        match fs.change_directory("/", &target) {
            Ok(new_dir) => {
                prop_assert_eq!(&new_dir, &resolved);
                prop_assert!(fs.get(&resolved).is_some_and(Entry::is_dir));
            }
            Err(VfsError::NotFound(_)) => {
                prop_assert!(!fs.get(&resolved).is_some_and(Entry::is_dir));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn second_identical_move_fails(fs in fs_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!fs.is_empty());
        let mut fs = fs;
        let source = pick.get(&fs.iter().map(|e| e.path.clone()).collect::<Vec<_>>()).clone();
        let destination = format!("{source}.moved");

        prop_assert!(fs.rename(&source, &destination).is_ok());
        prop_assert_eq!(
            fs.rename(&source, &destination),
            Err(VfsError::NotFound(source.clone()))
        );
    }

    #[test]
    fn moved_directory_accepts_cd(fs in fs_strategy()) {
        let mut fs = fs;
        let dirs: Vec<String> = fs.iter().filter(|e| e.is_dir()).map(|e| e.path.clone()).collect();
        prop_assume!(!dirs.is_empty());
        let destination = format!("{}-renamed", dirs[0]);

        fs.rename(&dirs[0], &destination).unwrap();
        prop_assert_eq!(fs.change_directory("/", &destination), Ok(destination.clone()));
    }

    #[test]
    fn log_keeps_every_action_in_order(actions in prop::collection::vec("[A-Za-z0-9 /.]{1,20}", 0..16)) {
        let mut log = ActionLog::new();
        for action in &actions {
            log.append(action.clone());
        }

        let xml = log.to_xml();
        let mut cursor = 0;
        for action in &actions {
            let needle = format!("<entry>{action}</entry>");
            let found = xml[cursor..].find(&needle);
            prop_assert!(found.is_some(), "missing {:?}", action);
            cursor += found.unwrap_or(0) + needle.len();
        }
        prop_assert_eq!(xml.matches("<entry>").count(), actions.len());
    }
}
