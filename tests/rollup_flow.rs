//! End-to-end flow: generate synthetic batches, submit them through the
//! chain, and verify the sealed results.

use rollup_batch::chain::{verify_sealed, RootChain};
use rollup_batch::merkle::genesis_root;
use rollup_batch::sample::gen_batch;
use rollup_batch::types::ThresholdPredicate;

#[tokio::test]
async fn sequential_batches_form_a_verifiable_chain() {
    let chain = RootChain::new();
    let predicate = ThresholdPredicate::credit_score_floor();

    let mut previous = genesis_root();
    for batch_index in 0..4 {
        let records = gen_batch(batch_index, 50);
        let sealed = chain.submit(&records, &predicate).await;

        assert!(verify_sealed(&sealed));
        assert_eq!(sealed.result.previous_root, previous);
        assert_eq!(sealed.result.total, 50);
        assert_eq!(
            sealed.result.valid_count + sealed.result.invalid_ids.len(),
            sealed.result.total
        );
        assert_eq!(sealed.result.root.len(), 64);

        previous = sealed.result.root;
    }

    assert_eq!(chain.current_root().await, previous);
}

#[tokio::test]
async fn stricter_predicates_reject_more_records() {
    let chain = RootChain::new();
    let records = gen_batch(0, 200);

    let floor_only = chain
        .submit(&records, &ThresholdPredicate::credit_score_floor())
        .await;
    let full = chain
        .submit(&records, &ThresholdPredicate::credit_eligibility())
        .await;

    assert!(full.result.valid_count <= floor_only.result.valid_count);
    // The generator straddles the thresholds, so both classes appear.
    assert!(floor_only.result.valid_count > 0);
    assert!(!floor_only.result.invalid_ids.is_empty());
}
