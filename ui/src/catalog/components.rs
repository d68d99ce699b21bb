/// A web element and the React Native primitive that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMapping {
    pub web_tag: &'static str,
    pub native_tag: &'static str,
    pub purpose: &'static str,
    pub web_example: &'static str,
    pub native_example: &'static str,
    pub note: Option<&'static str>,
}

pub static COMPONENT_MAPPINGS: [ComponentMapping; 8] = [
    ComponentMapping {
        web_tag: "<div>",
        native_tag: "<View>",
        purpose: "Basic layout container",
        web_example: r#"<div className="container">
  <p>Hello World</p>
</div>"#,
        native_example: r#"<View style={styles.container}>
  <Text>Hello World</Text>
</View>"#,
        note: Some("View is the fundamental building block. Flexbox layout by default with flexDirection: column"),
    },
    ComponentMapping {
        web_tag: "<span>, <p>",
        native_tag: "<Text>",
        purpose: "Display text content",
        web_example: r#"<p>Welcome to React</p>
<span>Inline text</span>"#,
        native_example: r#"<Text>Welcome to React</Text>
<Text>All text must be wrapped</Text>"#,
        note: Some("ALL text must be inside <Text> components. Text cannot be a direct child of <View> without wrapping"),
    },
    ComponentMapping {
        web_tag: "<img>",
        native_tag: "<Image>",
        purpose: "Display images",
        web_example: r#"<img
  src="/logo.png"
  alt="Logo"
/>"#,
        native_example: r#"<Image
  source={require('./logo.png')}
  style={{width: 100, height: 100}}
/>"#,
        note: Some("Requires explicit width/height. Use source={{ uri: 'url' }} for remote images"),
    },
    ComponentMapping {
        web_tag: "<button>",
        native_tag: "<TouchableOpacity>",
        purpose: "Interactive buttons",
        web_example: r#"<button onClick={handlePress}>
  Click Me
</button>"#,
        native_example: r#"<TouchableOpacity onPress={handlePress}>
  <Text>Click Me</Text>
</TouchableOpacity>"#,
        note: Some("Use onPress instead of onClick. Must wrap <Text> for button labels"),
    },
    ComponentMapping {
        web_tag: "<input>",
        native_tag: "<TextInput>",
        purpose: "Text input fields",
        web_example: r#"<input
  type="text"
  value={text}
  onChange={e => setText(e.target.value)}
/>"#,
        native_example: r#"<TextInput
  value={text}
  onChangeText={setText}
  style={styles.input}
/>"#,
        note: Some("Use onChangeText instead of onChange. No type attribute needed"),
    },
    ComponentMapping {
        web_tag: "overflow: scroll",
        native_tag: "<ScrollView>",
        purpose: "Scrollable content",
        web_example: r#"<div style={{overflow: 'scroll'}}>
  <p>Content...</p>
</div>"#,
        native_example: r#"<ScrollView>
  <Text>Content...</Text>
</ScrollView>"#,
        note: Some("Scrolling is NOT automatic. Must explicitly wrap content in ScrollView"),
    },
    ComponentMapping {
        web_tag: "<ul>, <li>",
        native_tag: "<FlatList>",
        purpose: "Render lists efficiently",
        web_example: r#"<ul>
  {items.map(item =>
    <li key={item.id}>{item.name}</li>
  )}
</ul>"#,
        native_example: r#"<FlatList
  data={items}
  renderItem={({item}) => <Text>{item.name}</Text>}
  keyExtractor={item => item.id}
/>"#,
        note: Some("FlatList is optimized for long lists. Only renders visible items (virtualization)"),
    },
    ComponentMapping {
        web_tag: "<a>",
        native_tag: "<TouchableOpacity> + Linking",
        purpose: "Navigation/links",
        web_example: r#"<a href="/about">
  About Us
</a>"#,
        native_example: r#"<TouchableOpacity
  onPress={() => navigation.navigate('About')}
>
  <Text style={styles.link}>About Us</Text>
</TouchableOpacity>"#,
        note: Some("Use React Navigation for in-app navigation. Use Linking API for external URLs"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_starts_with_div_to_view() {
        let first = &COMPONENT_MAPPINGS[0];
        assert_eq!(first.web_tag, "<div>");
        assert_eq!(first.native_tag, "<View>");
        assert_eq!(first.purpose, "Basic layout container");
    }

    #[test]
    fn web_tags_are_distinct() {
        for (i, a) in COMPONENT_MAPPINGS.iter().enumerate() {
            for b in COMPONENT_MAPPINGS.iter().skip(i + 1) {
                assert_ne!(a.web_tag, b.web_tag);
            }
        }
    }
}
