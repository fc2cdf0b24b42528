use crate::config::MachineConfig;
use crate::order::TotalPreorder;
use crate::sorting_machine::SortingMachine;

/// Sort `items` by `order` with a sorting machine.
///
/// Not stable: equal-ranked items may come out in any order.
pub fn heapsort<T, O: TotalPreorder<T>>(items: Vec<T>, order: O) -> Vec<T> {
    let config = MachineConfig::new().with_capacity(items.len());
    let mut machine = SortingMachine::with_config(order, config);
    machine.extend(items);
    machine.change_to_extraction_mode().into_iter().collect()
}
