//! Benchmarking setup for pallet-aya-token

use super::*;

#[allow(unused)]
use crate::Pallet as AyaToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const OTHER_ROLE: RoleId = [1u8; 32];

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, SEED);
    Pallet::<T>::insert_role(&ADMIN_ROLE, &admin);
    admin
}

/// Credit `who` directly, keeping the supply in step.
fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |bal| *bal = bal.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        fund::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 9_000_000);
    }

    #[benchmark]
    fn transfer_batch(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller, n as u128 * 1_000);
        let destinations: Vec<T::AccountId> =
            (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts = vec![1_000u128; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), destinations, amounts);

        assert_eq!(Balances::<T>::get(&caller), 0);
    }

    #[benchmark]
    fn transfer_from_batch(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let spender: T::AccountId = whitelisted_caller();
        let sources: Vec<T::AccountId> = (0..n).map(|i| account("owner", i, SEED)).collect();
        let destinations: Vec<T::AccountId> =
            (0..n).map(|i| account("recipient", i, SEED)).collect();
        for source in &sources {
            fund::<T>(source, 1_000);
            Allowances::<T>::insert(source, &spender, 1_000);
        }
        let amounts = vec![1_000u128; n as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), sources.clone(), destinations, amounts);

        for source in &sources {
            assert_eq!(Balances::<T>::get(source), 0);
        }
    }

    #[benchmark]
    fn add_black_list() {
        let admin = admin::<T>();
        let account: T::AccountId = account("target", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert_eq!(BlackList::<T>::get(&account), true);
    }

    #[benchmark]
    fn remove_black_list() {
        let admin = admin::<T>();
        let account: T::AccountId = account("target", 0, SEED);
        BlackList::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert_eq!(BlackList::<T>::get(&account), false);
    }

    #[benchmark]
    fn destroy_black_funds() {
        let admin = admin::<T>();
        Treasury::<T>::put(&admin);
        let account: T::AccountId = account("target", 0, SEED);
        fund::<T>(&account, 1_000_000);
        BlackList::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), account.clone());

        assert_eq!(Balances::<T>::get(&account), 0);
        assert_eq!(Balances::<T>::get(&admin), 1_000_000);
    }

    #[benchmark]
    fn grant_role() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), ADMIN_ROLE, account.clone());

        assert!(Pallet::<T>::has_role(&ADMIN_ROLE, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, SEED);
        Pallet::<T>::insert_role(&ADMIN_ROLE, &account);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), ADMIN_ROLE, account.clone());

        assert!(!Pallet::<T>::has_role(&ADMIN_ROLE, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::insert_role(&OTHER_ROLE, &caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), OTHER_ROLE);

        assert!(!Pallet::<T>::has_role(&OTHER_ROLE, &caller));
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 2_000);
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 400);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 600);
    }

    #[benchmark]
    fn set_treasury() {
        let admin = admin::<T>();
        let treasury: T::AccountId = account("treasury", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), treasury.clone());

        assert_eq!(Treasury::<T>::get(), Some(treasury));
    }

    impl_benchmark_test_suite!(AyaToken, crate::mock::new_test_ext(), crate::mock::Test);
}
