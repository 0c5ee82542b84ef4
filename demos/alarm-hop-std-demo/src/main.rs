use alarm_hop_radio_lib::radio_devices::{SimulatedMedium, SimulationParameters};
use alarm_hop_radio_lib::role_resolver::{RX_IDENTITY, TX_IDENTITY};
use alarm_hop_radio_lib::{AlarmConfiguration, AlarmNode, MacAddress};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use env_logger::Builder;
use log::LevelFilter;
use log::{Level, log};

// Not in the role table, so this unit falls back to listening.
const STRAY_IDENTITY: MacAddress = MacAddress::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x99]);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    Builder::new().filter_level(LevelFilter::Info).init();

    log!(Level::Info, "Starting up");
    let medium: &'static SimulatedMedium = Box::leak(Box::new(SimulatedMedium::new(SimulationParameters {
        send_failure_per_mille: 20,
        delivery_loss_per_mille: 100,
        rng_seed: 0x5eed,
    })));

    let mut nodes = Vec::new();
    for identity in [TX_IDENTITY, RX_IDENTITY, STRAY_IDENTITY] {
        let radio_device = match medium.attach(identity) {
            Ok(radio_device) => radio_device,
            Err(error) => {
                log!(Level::Error, "Failed to attach {}: {}", identity, error);
                return;
            }
        };
        let mut node = AlarmNode::new();
        match node.initialize(AlarmConfiguration::default(), spawner, radio_device) {
            Ok(role) => log!(Level::Info, "Node {} running as {:?}", identity, role),
            Err(error) => {
                log!(Level::Error, "Failed to initialize node {}: {}", identity, error);
                return;
            }
        }
        nodes.push((identity, node));
    }

    loop {
        Timer::after(Duration::from_secs(1)).await;
        for (identity, node) in &nodes {
            if let Some(count) = node.alarm_count() {
                log!(Level::Debug, "Node {} has {} alarms in the current window", identity, count);
            }
        }
    }
}
