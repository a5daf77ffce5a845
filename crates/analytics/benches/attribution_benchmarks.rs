use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::Utc;
use vendora_analytics::attribute;
use vendora_auth::{Principal, PrincipalDirectory, Role};
use vendora_catalog::{Catalog, CatalogItem, OwnershipScope, scoped_item_ids};
use vendora_core::{CatalogItemId, OrderId, PrincipalId};
use vendora_orders::{LineItem, Order, OrderStatus, ShippingRegion};

struct Fixture {
    directory: PrincipalDirectory,
    manager: Principal,
    catalog: Catalog,
    orders: Vec<Order>,
}

/// One owner tree (owner → manager → providers), half the catalog owned
/// inside the manager's subtree, orders spread over every item.
fn fixture(provider_count: usize, order_count: usize) -> Fixture {
    let owner = Principal::new(PrincipalId::new(), Role::Owner, None);
    let manager = Principal::new(PrincipalId::new(), Role::Manager, Some(owner.id));
    let mut principals = vec![owner.clone(), manager.clone()];
    let mut items = Vec::new();

    for i in 0..provider_count {
        let in_subtree = i % 2 == 0;
        let superior = if in_subtree { manager.id } else { owner.id };
        let provider = Principal::new(PrincipalId::new(), Role::Provider, Some(superior));
        items.push(CatalogItem::new(
            CatalogItemId::new(),
            provider.id,
            format!("item-{i}"),
            500 + i as u64,
        ));
        principals.push(provider);
    }

    let orders = (0..order_count)
        .map(|i| Order {
            id: OrderId::new(),
            buyer: PrincipalId::new(),
            created_at: Utc::now(),
            status: OrderStatus::Delivered,
            line_items: vec![
                LineItem::new(items[i % items.len()].id, 1, 1000),
                LineItem::new(items[(i + 1) % items.len()].id, 2, 750),
            ],
            shipping: ShippingRegion::new("US", "CA", "San Jose"),
        })
        .collect();

    Fixture {
        directory: PrincipalDirectory::from_principals(principals),
        manager,
        catalog: Catalog::from_items(items),
        orders,
    }
}

fn bench_attribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribution");

    for order_count in [1_000usize, 10_000] {
        let fx = fixture(100, order_count);
        let scope = scoped_item_ids(&fx.manager, &fx.directory, &fx.catalog)
            .expect("fixture tree has no cycles");

        group.throughput(Throughput::Elements(order_count as u64));
        group.bench_with_input(
            BenchmarkId::new("scoped", order_count),
            &order_count,
            |b, _| b.iter(|| attribute(black_box(&fx.orders), black_box(&scope))),
        );
        group.bench_with_input(
            BenchmarkId::new("global", order_count),
            &order_count,
            |b, _| {
                b.iter(|| attribute(black_box(&fx.orders), black_box(&OwnershipScope::Global)))
            },
        );
    }

    group.finish();
}

fn bench_scope_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_resolution");

    for provider_count in [100usize, 1_000] {
        let fx = fixture(provider_count, 10);
        group.bench_with_input(
            BenchmarkId::from_parameter(provider_count),
            &provider_count,
            |b, _| {
                b.iter(|| {
                    scoped_item_ids(
                        black_box(&fx.manager),
                        black_box(&fx.directory),
                        black_box(&fx.catalog),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_attribution, bench_scope_resolution);
criterion_main!(benches);
