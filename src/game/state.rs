// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use bevy::{
    ecs::{reflect::ReflectResource, resource::Resource},
    log::{info, warn},
    reflect::Reflect,
};

/// Coin ledger and fill counter, owned by the app as a resource.
#[derive(Resource, Reflect, Debug, Default, Clone, PartialEq, Eq)]
#[reflect(Resource)]
pub struct GameState {
    coins: u32,
    jars_filled: u32,
}

impl GameState {
    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn jars_filled(&self) -> u32 {
        self.jars_filled
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
        info!("Coins: {}", self.coins);
    }

    pub fn on_jar_filled(&mut self, coins_per_fill: u32) {
        self.add_coins(coins_per_fill);
        self.jars_filled += 1;
        info!(
            "Jar filled! Earned {coins_per_fill} coins. Total fills: {}",
            self.jars_filled
        );
        warn!("Glass full!");
    }
}
