use crate::models::{
    Dish, Genre, MainIngredient, StapleCarb, Tag, Taste, Temperature,
};

use Genre::{Chinese, Japanese, Western};
use MainIngredient::{Fish, Meat, Vegetable};
use StapleCarb::{Bread, Noodle, Rice};
use Taste::{Hearty, Light, Rich};
use Temperature::{Cold, Hot};

/// Selectable tags. `other` values have no tag of their own.
pub(super) fn tags() -> Vec<Tag> {
    vec![
        Tag::emoji("がっつり", "🔥", Hearty),
        Tag::emoji("あっさり", "🌿", Light),
        Tag::emoji("こってり", "🧀", Rich),
        Tag::emoji("お米", "🍚", Rice),
        Tag::emoji("めん", "🍜", Noodle),
        Tag::emoji("パン", "🍞", Bread),
        Tag::emoji("お肉", "🍖", Meat),
        Tag::emoji("お魚", "🐟", Fish),
        Tag::emoji("野菜", "🥕", Vegetable),
        Tag::emoji("和食", "🇯🇵", Japanese),
        Tag::emoji("洋食", "🍝", Western),
        Tag::emoji("中華", "🇨🇳", Chinese),
        Tag::emoji("あったかい", "☀️", Hot),
        Tag::emoji("つめたい", "❄️", Cold),
    ]
}

pub(super) fn dishes() -> Vec<Dish> {
    vec![
        // rice
        Dish::fully_tagged("カレーライス", &["カレー"], Rice, Western, Meat, Hearty, Hot),
        Dish::fully_tagged("親子丼", &["丼", "鶏肉", "卵"], Rice, Japanese, Meat, Hearty, Hot),
        Dish::fully_tagged("牛丼", &["丼", "牛肉"], Rice, Japanese, Meat, Hearty, Hot),
        Dish::fully_tagged("カツ丼", &["丼", "とんかつ"], Rice, Japanese, Meat, Rich, Hot),
        Dish::fully_tagged("海鮮丼", &["丼", "刺身"], Rice, Japanese, Fish, Light, Cold),
        Dish::fully_tagged("鮭の塩焼き定食", &["鮭", "定食", "焼き魚"], Rice, Japanese, Fish, Light, Hot),
        Dish::fully_tagged("さばの味噌煮", &["さば", "煮魚"], Rice, Japanese, Fish, Rich, Hot),
        Dish::fully_tagged("寿司", &["すし", "刺身"], Rice, Japanese, Fish, Light, Cold),
        Dish::fully_tagged("オムライス", &["卵", "ケチャップ"], Rice, Western, Meat, Rich, Hot),
        Dish::fully_tagged("ハヤシライス", &["牛肉", "デミグラス"], Rice, Western, Meat, Rich, Hot),
        Dish::fully_tagged("チャーハン", &["炒飯", "焼き飯"], Rice, Chinese, Meat, Hearty, Hot),
        Dish::fully_tagged("麻婆豆腐", &["豆腐", "辛い"], Rice, Chinese, Meat, Rich, Hot),
        Dish::fully_tagged("天津飯", &["かに玉", "卵"], Rice, Chinese, Fish, Rich, Hot),
        Dish::fully_tagged("エビチリ", &["えび", "辛い"], Rice, Chinese, Fish, Rich, Hot),
        Dish::fully_tagged("ガパオライス", &["タイ料理", "バジル"], Rice, Genre::Other, Meat, Hearty, Hot),
        Dish::fully_tagged("ビビンバ", &["韓国料理", "ナムル"], Rice, Genre::Other, Vegetable, Hearty, Hot),
        // noodles
        Dish::fully_tagged("ラーメン", &["らーめん", "中華そば"], Noodle, Chinese, Meat, Rich, Hot),
        Dish::fully_tagged("担々麺", &["ごま", "辛い"], Noodle, Chinese, Meat, Rich, Hot),
        Dish::fully_tagged("冷やし中華", &["冷麺"], Noodle, Chinese, Vegetable, Light, Cold),
        Dish::fully_tagged("ざるそば", &["そば", "蕎麦"], Noodle, Japanese, Vegetable, Light, Cold),
        Dish::fully_tagged("きつねうどん", &["うどん", "油揚げ"], Noodle, Japanese, Vegetable, Light, Hot),
        Dish::fully_tagged("焼きそば", &["ソース"], Noodle, Japanese, Meat, Hearty, Hot),
        Dish::fully_tagged("カルボナーラ", &["パスタ", "スパゲッティ"], Noodle, Western, Meat, Rich, Hot),
        Dish::fully_tagged("ペペロンチーノ", &["パスタ", "にんにく"], Noodle, Western, Vegetable, Light, Hot),
        Dish::fully_tagged("冷製トマトパスタ", &["パスタ", "トマト"], Noodle, Western, Vegetable, Light, Cold),
        Dish::fully_tagged("フォー", &["ベトナム料理", "米粉"], Noodle, Genre::Other, Meat, Light, Hot),
        // bread
        Dish::fully_tagged("ハンバーガー", &["バーガー"], Bread, Western, Meat, Hearty, Hot),
        Dish::fully_tagged("フィッシュバーガー", &["バーガー", "白身魚"], Bread, Western, Fish, Hearty, Hot),
        Dish::fully_tagged("サンドイッチ", &["サンド", "ハム"], Bread, Western, Vegetable, Light, Cold),
        Dish::fully_tagged("カツサンド", &["サンド", "とんかつ"], Bread, Japanese, Meat, Hearty, Cold),
        Dish::fully_tagged("ピザトースト", &["ピザ", "チーズ"], Bread, Western, Meat, Rich, Hot),
        // everything else
        Dish::fully_tagged("グラタン", &["マカロニ", "チーズ"], StapleCarb::Other, Western, Meat, Rich, Hot),
        Dish::fully_tagged("ポトフ", &["スープ", "野菜"], StapleCarb::Other, Western, Vegetable, Light, Hot),
        Dish::fully_tagged("肉じゃが", &["じゃがいも", "煮物"], StapleCarb::Other, Japanese, Meat, Light, Hot),
        Dish::fully_tagged("冷しゃぶサラダ", &["しゃぶしゃぶ", "サラダ"], StapleCarb::Other, Japanese, Meat, Light, Cold),
        Dish::fully_tagged("餃子", &["ギョーザ", "焼き餃子"], StapleCarb::Other, Chinese, Meat, Hearty, Hot),
        Dish::fully_tagged("野菜炒め", &["炒め物"], StapleCarb::Other, Chinese, Vegetable, Hearty, Hot),
    ]
}
