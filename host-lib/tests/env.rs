use std::collections::HashMap;

use async_trait::async_trait;

use caravel_host_lib::{
    test_configure,
    Dut,
    DutError,
    EnvConfig,
    EnvError,
    Environment,
};
use caravel_protocol::{
    bus::RangeError,
    signal,
    BusValue,
    Logic,
};


/// A chip that raises the management GPIO a fixed number of cycles after `csb`
/// was released
struct Wire {
    driven:   HashMap<String, Logic>,
    bus:      BusValue,
    delay:    u64,
    released: Option<u64>,
    cycles:   u64,
}

impl Wire {
    fn new(delay: u64) -> Self {
        Self {
            driven:   HashMap::new(),
            bus:      BusValue::from_u64(0x8F, 38),
            delay,
            released: None,
            cycles:   0,
        }
    }
}

#[async_trait(?Send)]
impl Dut for Wire {
    fn drive(&mut self, name: &str, logic: Logic) -> Result<(), DutError> {
        self.driven.insert(name.to_owned(), logic);
        Ok(())
    }

    fn release(&mut self, name: &str) -> Result<(), DutError> {
        self.driven.remove(name);
        if name == signal::CSB {
            self.released = Some(self.cycles);
        }
        Ok(())
    }

    fn sample(&self, name: &str) -> Result<BusValue, DutError> {
        match name {
            signal::MGMT_GPIO => {
                let raised = self.released
                    .map(|at| self.cycles - at >= self.delay)
                    .unwrap_or(false);
                Ok(BusValue::uniform(Logic::from(raised), 1))
            }
            signal::MPRJ_IO => {
                Ok(self.bus.clone())
            }
            name => {
                self.driven.get(name)
                    .map(|&logic| BusValue::uniform(logic, 1))
                    .ok_or_else(|| DutError::UnknownSignal(name.to_owned()))
            }
        }
    }

    async fn clock_cycles(&mut self, cycles: u64) {
        self.cycles += cycles;
    }
}


fn config(wait_timeout_cycles: Option<u64>) -> EnvConfig {
    EnvConfig {
        reset_cycles: 5,
        wait_timeout_cycles,
        .. EnvConfig::default()
    }
}


#[tokio::test(flavor = "current_thread")]
async fn it_should_hold_reset_and_csb_during_configuration() {
    let env = test_configure(Wire::new(0), &config(None)).await.unwrap();

    assert_eq!(env.cycles(), 5);
    assert_eq!(env.dut().driven.get(signal::CSB), Some(&Logic::One));
    assert_eq!(env.dut().driven.get(signal::RESETB), Some(&Logic::One));
}

#[tokio::test(flavor = "current_thread")]
async fn it_should_wait_for_the_management_gpio() {
    let mut env = test_configure(Wire::new(10), &config(Some(100))).await
        .unwrap();

    env.release_csb().await.unwrap();
    assert!(env.dut().driven.get(signal::CSB).is_none());

    env.wait_mgmt_gpio(Logic::One).await.unwrap();
    assert!(env.cycles() >= 5 + 10);
}

#[tokio::test(flavor = "current_thread")]
async fn it_should_time_out_if_csb_is_never_released() {
    let mut env = test_configure(Wire::new(0), &config(Some(50))).await
        .unwrap();

    let result = env.wait_mgmt_gpio(Logic::One).await;

    assert_eq!(
        result,
        Err(EnvError::Timeout { signal: signal::MGMT_GPIO, cycles: 50 }),
    );
    assert_eq!(env.cycles(), 5 + 50);
}

#[tokio::test(flavor = "current_thread")]
async fn it_should_sample_a_range_of_gpios() {
    let env = test_configure(Wire::new(0), &config(None)).await.unwrap();

    let all = env.monitor_gpio(37, 0).unwrap();
    assert_eq!(all.width(), 38);
    assert_eq!(all.integer(), Ok(0x8F));

    let low = env.monitor_gpio(3, 0).unwrap();
    assert_eq!(low.binstr(), "1111");

    assert_eq!(
        env.monitor_gpio(38, 0),
        Err(EnvError::Range(RangeError { high: 38, low: 0, width: 38 })),
    );
}
