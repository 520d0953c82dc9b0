use crate as pallet_aya_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

/// Supply minted to [`Owner`] at genesis.
pub const INITIAL_SUPPLY: u128 = 1_000_000_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        AyaToken: pallet_aya_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const Owner: u64 = 1;
    pub const MaxBatchSize: u32 = 16;
    pub static AllowEmptyBatch: bool = true;
}

impl pallet_aya_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxBatchSize = MaxBatchSize;
    type AllowEmptyBatch = AllowEmptyBatch;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_aya_token::GenesisConfig::<Test> {
        owner: Some(Owner::get()),
        initial_supply: INITIAL_SUPPLY,
        admins: vec![],
        blacklisted: vec![],
        token_name: b"AYA".to_vec(),
        token_symbol: b"AYA".to_vec(),
        decimals: 18,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Sum of every stored balance.
pub fn sum_of_balances() -> u128 {
    pallet_aya_token::Balances::<Test>::iter_values().sum()
}
