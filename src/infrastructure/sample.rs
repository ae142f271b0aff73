//! Built-in sample collection: two orgs, seven folders.

use uuid::Uuid;

use crate::domain::{Folder, OrgId};

pub const SAMPLE_ORG_1: Uuid = Uuid::from_u128(0xc1556e17_b7c0_45a3_a6ae_9546248fb17a);
pub const SAMPLE_ORG_2: Uuid = Uuid::from_u128(0x9b4cdb0a_cfea_4f9d_8a68_24f038fae385);

/// `alpha` tree and `golf` in org 1, `foxtrot` in org 2.
pub fn sample_folders() -> Vec<Folder> {
    let org1 = OrgId::new(SAMPLE_ORG_1);
    let org2 = OrgId::new(SAMPLE_ORG_2);
    vec![
        Folder::new("alpha", org1, "alpha"),
        Folder::new("bravo", org1, "alpha.bravo"),
        Folder::new("charlie", org1, "alpha.bravo.charlie"),
        Folder::new("delta", org1, "alpha.delta"),
        Folder::new("echo", org1, "alpha.delta.echo"),
        Folder::new("foxtrot", org2, "foxtrot"),
        Folder::new("golf", org1, "golf"),
    ]
}
